use std::fmt;

use tracing::trace;

use super::{
    gallows,
    segment::{canonicalize, LetterUnit, Word},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Continue,
    Win,
    Lose,
}

impl State {
    /// Wrong guesses a player can make and still be playing.
    pub const MAX_WRONG: usize = 5;

    /// Loss is checked first, so running out of guesses always loses.
    pub const fn derive(wrong: usize, missing: usize) -> Self {
        if wrong > Self::MAX_WRONG {
            Self::Lose
        } else if missing < 1 {
            Self::Win
        } else {
            Self::Continue
        }
    }

    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Continue)
    }
}

/// Characters in the order they were first inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Letters(Vec<char>);

impl Letters {
    fn insert(&mut self, ch: char) -> bool {
        if self.contains(ch) {
            false
        } else {
            self.0.push(ch);
            true
        }
    }

    fn contains(&self, ch: char) -> bool {
        self.0.contains(&ch)
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    fn as_slice(&self) -> &[char] {
        &self.0
    }

    fn joined(&self) -> String {
        self.0
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    word: Word,
    guessed: Letters,
    wrong: Letters,
}

impl Game {
    pub fn new(raw: impl Into<String>) -> Self {
        Self::from_word(Word::new(raw))
    }

    pub fn from_word(word: Word) -> Self {
        Self {
            word,
            guessed: Letters::default(),
            wrong: Letters::default(),
        }
    }

    /// Submits one character and returns the resulting state.
    ///
    /// Anything that isn't a letter or digit is ignored. Guessing after the
    /// game has finished is not rejected here.
    pub fn guess(&mut self, ch: char) -> State {
        if !LetterUnit::new(ch).is_guessable() {
            trace!(?ch, "ignoring unguessable character");
            return self.state();
        }

        let letter = canonicalize(ch);
        self.guessed.insert(letter);

        if !self.word.contains(letter) && self.wrong.insert(letter) {
            trace!(%letter, wrong = self.wrong.len(), "wrong guess");
        }

        self.state()
    }

    pub fn state(&self) -> State {
        State::derive(self.wrong.len(), self.missing_units())
    }

    /// Guessable units whose letter hasn't been guessed yet.
    pub fn missing_units(&self) -> usize {
        self.word
            .guessable()
            .filter_map(LetterUnit::canonical)
            .filter(|letter| !self.guessed.contains(*letter))
            .count()
    }

    /// The raw target word, for revealing it at the end.
    pub fn word(&self) -> &str {
        self.word.as_str()
    }

    #[cfg(test)]
    pub fn guessed(&self) -> &[char] {
        self.guessed.as_slice()
    }

    #[cfg(test)]
    pub fn wrong(&self) -> &[char] {
        self.wrong.as_slice()
    }

    pub fn render_word(&self) -> String {
        self.word
            .units()
            .iter()
            .map(|unit| match unit.canonical() {
                Some(letter) if self.guessed.contains(letter) => letter.to_string(),
                Some(_) => "_".to_owned(),
                None => unit.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn render_wrong_letters(&self) -> String {
        self.wrong.joined()
    }

    pub fn render_gallows(&self) -> &'static str {
        gallows::frame(self.wrong.len())
    }

    /// Figure, word and wrong letters in one code block.
    pub fn render_full(&self) -> String {
        format!(
            "```\n{}\n\n{}\n\n{}\n```",
            self.render_gallows(),
            self.render_word(),
            self.render_wrong_letters()
        )
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_full())
    }
}

#[cfg(test)]
mod tests {
    use paste::paste;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use tracing_test::traced_test;

    use super::{Game, State};

    macro_rules! scenario {
        ($($name:ident: $word:expr, $guesses:expr => $state:ident, $rendered:expr;)+) => {
            paste! {
                $(
                    #[test]
                    #[traced_test]
                    fn [<plays_ $name>]() {
                        let mut game = Game::new($word);

                        for ch in $guesses.chars() {
                            game.guess(ch);
                        }

                        assert_eq!(game.state(), State::$state);
                        assert_eq!(game.render_word(), $rendered);
                    }
                )+
            }
        };
    }

    scenario! {
        nothing: "cat", "" => Continue, "_ _ _";
        one_letter: "cat", "c" => Continue, "C _ _";
        two_letters: "cat", "ca" => Continue, "C A _";
        whole_word: "cat", "cat" => Win, "C A T";
        uppercase_guesses: "cat", "CAT" => Win, "C A T";
        repeated_letters: "banana", "ban" => Win, "B A N A N A";
        phrase: "hello, world", "helowrd" => Win, "H E L L O ,   W O R L D";
        digits: "route 66", "6" => Continue, "_ _ _ _ _   6 6";
        emoji: "😂", "" => Win, "😂";
        two_emoji: "😂😂", "" => Win, "😂 😂";
        emoji_prefix: "😂hello", "" => Continue, "😂 _ _ _ _ _";
        emoji_solved: "😂hello", "hello" => Win, "😂 H E L L O";
        punctuation_only: "?!", "" => Win, "? !";
        empty: "", "" => Win, "";
        five_wrong: "cat", "xyzqw" => Continue, "_ _ _";
        six_wrong: "cat", "xyzqwv" => Lose, "_ _ _";
        accented: "café", "CAFÉ" => Win, "C A F É";
        superscript: "x²", "x" => Win, "X ²";
        subscript: "H₂O", "ho" => Win, "H ₂ O";
        roman_numeral: "Ⅻ", "" => Win, "Ⅻ";
        vowel_sign: "हा", "" => Continue, "_ ा";
        vowel_sign_solved: "हा", "ह" => Win, "ह ा";
    }

    #[test]
    fn reveals_cat_one_letter_at_a_time() {
        let mut game = Game::new("cat");

        assert_eq!(game.guess('c'), State::Continue);
        assert_eq!(game.render_word(), "C _ _");

        assert_eq!(game.guess('a'), State::Continue);
        assert_eq!(game.render_word(), "C A _");

        assert_eq!(game.guess('t'), State::Win);
        assert_eq!(game.render_word(), "C A T");
    }

    #[test]
    fn loses_exactly_on_sixth_wrong_letter() {
        let mut game = Game::new("cat");

        for ch in ['x', 'y', 'z', 'q', 'w'] {
            assert_eq!(game.guess(ch), State::Continue);
        }

        assert_eq!(game.guess('v'), State::Lose);
        assert_eq!(game.render_wrong_letters(), "X Y Z Q W V");
    }

    #[test]
    fn repeated_wrong_letter_counts_once() {
        let mut game = Game::new("cat");

        for _ in 0..10 {
            game.guess('x');
        }

        assert_eq!(game.wrong(), &['X']);
        assert_eq!(game.state(), State::Continue);
    }

    #[test]
    fn ignores_punctuation_and_spaces() {
        let mut game = Game::new("cat");
        let before = game.clone();

        for ch in [' ', '!', '-', '\n', '😂', '\0'] {
            assert_eq!(game.guess(ch), State::Continue);
        }

        assert_eq!(game, before);
    }

    #[test]
    fn case_insensitive_both_ways() {
        let mut lower = Game::new("a");
        let mut upper = Game::new("A");

        assert_eq!(lower.guess('A'), State::Win);
        assert_eq!(upper.guess('a'), State::Win);
    }

    #[test]
    fn wrong_letters_keep_guess_order() {
        let mut game = Game::new("cat");

        for ch in "zxcy".chars() {
            game.guess(ch);
        }

        assert_eq!(game.guessed(), &['Z', 'X', 'C', 'Y']);
        assert_eq!(game.render_wrong_letters(), "Z X Y");
    }

    #[test]
    fn word_is_the_raw_target() {
        let mut game = Game::new("Hello World");
        game.guess('h');

        assert_eq!(game.word(), "Hello World");
    }

    #[test]
    fn state_derivation_checks_loss_first() {
        assert_eq!(State::derive(0, 0), State::Win);
        assert_eq!(State::derive(5, 0), State::Win);
        assert_eq!(State::derive(6, 0), State::Lose);
        assert_eq!(State::derive(6, 3), State::Lose);
        assert_eq!(State::derive(5, 1), State::Continue);
    }

    #[test]
    fn renders_full_board() {
        let mut game = Game::new("cat");
        game.guess('c');
        game.guess('x');

        let expected = "```
 ____
|    |
|    O
|
|
|

C _ _

X
```";

        assert_eq!(game.render_full(), expected);
        assert_eq!(game.to_string(), expected);
    }

    #[test]
    fn gallows_follows_wrong_count() {
        let mut game = Game::new("cat");
        let mut previous = game.render_gallows();

        for ch in "xyzqwv".chars() {
            game.guess(ch);
            assert_ne!(game.render_gallows(), previous);
            previous = game.render_gallows();
        }
    }

    proptest! {
        #[test]
        fn guessing_never_panics(raw in any::<String>(), guesses in any::<Vec<char>>()) {
            let mut game = Game::new(raw);

            for ch in guesses {
                game.guess(ch);
            }

            game.render_full();
        }

        #[test]
        fn repeated_guess_is_idempotent(raw in "\\PC{0,12}", ch in any::<char>()) {
            let mut once = Game::new(raw.clone());
            once.guess(ch);

            let mut twice = Game::new(raw);
            twice.guess(ch);
            twice.guess(ch);

            prop_assert_eq!(once, twice);
        }

        #[test]
        fn progress_is_monotonic(raw in "\\PC{0,12}", guesses in "\\PC{0,24}") {
            let mut game = Game::new(raw);
            let mut missing = game.missing_units();
            let mut wrong = game.wrong().len();

            for ch in guesses.chars() {
                game.guess(ch);

                prop_assert!(game.missing_units() <= missing);
                prop_assert!(game.wrong().len() >= wrong);

                missing = game.missing_units();
                wrong = game.wrong().len();
            }
        }

        #[test]
        fn wins_iff_every_letter_guessed(raw in "[a-zA-Z0-9 ,.!]{0,12}", guesses in "[a-z0-9]{0,20}") {
            let mut game = Game::new(raw.clone());

            for ch in guesses.chars() {
                game.guess(ch);
            }

            let all_guessed = raw
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .all(|c| game.guessed().contains(&c.to_ascii_uppercase()));
            let lost = game.wrong().len() >= 6;

            prop_assert_eq!(game.state() == State::Lose, lost);
            prop_assert_eq!(game.state() == State::Win, all_guessed && !lost);
        }

        #[test]
        fn wrong_letters_are_guessed_letters(raw in "\\PC{0,12}", guesses in "\\PC{0,24}") {
            let mut game = Game::new(raw);

            for ch in guesses.chars() {
                game.guess(ch);
            }

            for letter in game.wrong() {
                prop_assert!(game.guessed().contains(letter));
            }
        }
    }
}

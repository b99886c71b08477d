/// One frame per wrong guess, from the empty gallows to the full figure.
const FRAMES: [&str; 7] = [
    r" ____
|    |
|
|
|
|",
    r" ____
|    |
|    O
|
|
|",
    r" ____
|    |
|    O
|    |
|
|",
    r" ____
|    |
|    O
|   /|
|
|",
    r" ____
|    |
|    O
|   /|\
|
|",
    r" ____
|    |
|    O
|   /|\
|   /
|",
    r" ____
|    |
|    O
|   /|\
|   / \
|",
];

/// The figure for `wrong` wrong guesses, capped once fully drawn.
pub fn frame(wrong: usize) -> &'static str {
    FRAMES[wrong.min(FRAMES.len() - 1)]
}

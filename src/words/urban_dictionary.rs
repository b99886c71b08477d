use rand::{seq::SliceRandom, Rng};
use serde::Deserialize;
use tracing::{debug, instrument};

use super::{non_blank, Error};

const RANDOM: &str = "https://api.urbandictionary.com/v0/random";

#[derive(Deserialize)]
struct ApiResponse {
    list: Vec<Definition>,
}

#[derive(Deserialize)]
struct Definition {
    word: String,
}

#[instrument(skip_all)]
pub async fn random(client: &reqwest::Client) -> Result<String, Error> {
    let json = client
        .get(RANDOM)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    pick(&json, &mut rand::thread_rng())
}

/// Chooses one of the returned definitions' words.
fn pick(json: &str, rng: &mut impl Rng) -> Result<String, Error> {
    let response: ApiResponse = serde_json::from_str(json)?;
    debug!(definitions = response.list.len());

    let definition = response
        .list
        .choose(rng)
        .ok_or_else(|| Error::EmptyList(RANDOM.to_owned()))?;

    non_blank(definition.word.clone(), RANDOM)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::{pick, Error};

    #[test]
    fn picks_a_listed_word() {
        let json = r#"{"list": [
            {"definition": "a", "word": "yeet", "thumbs_up": 10},
            {"definition": "b", "word": " no cap ", "thumbs_up": 3}
        ]}"#;
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let word = pick(json, &mut rng).expect("non-empty list");
            assert!(["yeet", "no cap"].contains(&word.as_str()), "{word}");
        }
    }

    #[test]
    fn single_entry() {
        let json = r#"{"list": [{"word": "bussin"}]}"#;

        assert_eq!(
            pick(json, &mut StdRng::seed_from_u64(0)).expect("one entry"),
            "bussin"
        );
    }

    #[test]
    fn empty_list() {
        let result = pick(r#"{"list": []}"#, &mut StdRng::seed_from_u64(0));

        assert!(matches!(result, Err(Error::EmptyList(_))));
    }

    #[test]
    fn malformed_json() {
        let result = pick(r#"{"results": []}"#, &mut StdRng::seed_from_u64(0));

        assert!(matches!(result, Err(Error::Json(_))));
    }
}

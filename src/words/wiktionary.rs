use tracing::{debug, instrument};

use super::{non_blank, Error};

const RANDOM_LEMMA: &str =
    "https://en.wiktionary.org/wiki/Special:RandomInCategory/English_lemmas";

/// Follows the random-lemma redirect and reads the page title.
#[instrument(skip_all)]
pub async fn random(client: &reqwest::Client) -> Result<String, Error> {
    let response = client.get(RANDOM_LEMMA).send().await?.error_for_status()?;
    let url = response.url().to_string();
    debug!(url, "got random lemma");

    let html = response.text().await?;
    heading(&html, &url)
}

fn heading(html: &str, url: &str) -> Result<String, Error> {
    let html = scraper::Html::parse_document(html);
    let selector =
        scraper::Selector::parse("#firstHeading").expect("should be valid selector");

    let text = html
        .select(&selector)
        .next()
        .ok_or_else(|| Error::MissingHeading(url.to_owned()))?
        .text()
        .collect::<String>();

    non_blank(text, url)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{heading, Error};

    const URL: &str = "https://en.wiktionary.org/wiki/lantern";

    #[test]
    fn reads_first_heading() {
        let html = r#"<html><body>
            <h1 id="firstHeading" class="firstHeading mw-first-heading">
                <span class="mw-page-title-main">lantern</span>
            </h1>
            <div id="bodyContent"><h2>English</h2></div>
        </body></html>"#;

        assert_eq!(heading(html, URL).expect("has heading"), "lantern");
    }

    #[test]
    fn keeps_phrases_whole() {
        let html = r#"<h1 id="firstHeading">kick the bucket</h1>"#;

        assert_eq!(heading(html, URL).expect("has heading"), "kick the bucket");
    }

    #[test]
    fn missing_heading() {
        let html = "<html><body><h1>not it</h1></body></html>";

        assert!(matches!(heading(html, URL), Err(Error::MissingHeading(_))));
    }

    #[test]
    fn blank_heading() {
        let html = r#"<h1 id="firstHeading">   </h1>"#;

        assert!(matches!(heading(html, URL), Err(Error::BlankWord(_))));
    }
}

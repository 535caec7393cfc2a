//! Transport-neutral responses for request handlers.
//!
//! A handler receives raw text, scores it, and answers with a status code
//! and a plain-text body. Only a numeric score is a success; every other
//! outcome, including the zero classification, is a client error whose
//! body is the failure text.

use lexd_types::Diversity;
use tracing::debug;

use crate::analyzer::normalize;
use crate::scorer::Scorer;

/// Status for a numeric score.
pub const STATUS_OK: u16 = 200;

/// Status for every non-numeric outcome.
pub const STATUS_BAD_REQUEST: u16 = 400;

/// Status code and plain-text body for one scored text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP-style status code.
    pub status: u16,
    /// Score as text, or the failure reason.
    pub body: String,
}

impl Response {
    /// True when the body carries a numeric score.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Normalizes and scores `raw_text`, translating the outcome into a response.
pub fn respond(raw_text: &str, scorer: &Scorer) -> Response {
    let tokens = normalize(raw_text);

    let response = match scorer.score(&tokens) {
        Ok(Diversity::Score(value)) => Response {
            status: STATUS_OK,
            body: value.to_string(),
        },
        Ok(zero @ Diversity::Zero) => Response {
            status: STATUS_BAD_REQUEST,
            body: zero.to_string(),
        },
        Err(e) => Response {
            status: STATUS_BAD_REQUEST,
            body: e.to_string(),
        },
    };

    debug!(status = response.status, body = %response.body, "responded");
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn respond_default(text: &str) -> Response {
        respond(text, &Scorer::default())
    }

    #[test]
    fn empty_text() {
        let r = respond_default("   <br/> !!! ");
        assert_eq!(r.status, 400);
        assert_eq!(r.body, "EMPTY STRING");
        assert!(!r.is_success());
    }

    #[test]
    fn short_text() {
        let r = respond_default("Only a handful of words here.");
        assert_eq!(r.status, 400);
        assert_eq!(r.body, "TOO SHORT");
    }

    #[test]
    fn estimator_failure_text() {
        let text = (0..30)
            .map(|i| format!("the w{}", i))
            .collect::<Vec<_>>()
            .join(" ");
        let r = respond_default(&text);
        assert_eq!(r.status, 400);
        assert_eq!(r.body, "'the' USED TOO FREQUENTLY");
    }

    #[test]
    fn numeric_score_is_success() {
        let text = "alpha beta gamma delta alpha epsilon zeta beta eta theta \
                    iota kappa gamma lambda mu nu alpha xi omicron pi \
                    rho sigma tau delta upsilon phi chi psi omega beta \
                    one two three four five six seven eight nine ten";
        let r = respond_default(text);
        assert_eq!(r.status, 200, "body: {}", r.body);
        assert!(r.is_success());
        let value: f64 = r.body.parse().expect("numeric body");
        assert!(value.is_finite());
    }
}

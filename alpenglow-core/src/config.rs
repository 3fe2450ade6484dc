//! Site configuration.
//!
//! The animation roster, reveal selectors, and contact details are data,
//! not code: the UI crate ships a `site.json` asset and parses it here.
//! Adding a section animation or changing the form endpoint is a config
//! edit, never a source change.

use serde::Deserialize;

use crate::sequence::LoadingSchedule;

/// One named vector animation: which container it mounts into and the
/// asset it plays.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AnimationSpec {
    /// DOM id of the container element
    pub container_id: String,
    /// Path to the Lottie JSON asset
    pub path: String,
}

/// Contact affordances: where the form posts and what the phone/email
/// actions use.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactConfig {
    /// Form-relay endpoint the contact modal POSTs to
    pub form_endpoint: String,
    /// Address used by the email action and the mailto link
    pub email: String,
    /// Number copied (desktop) or dialed (mobile) by the phone action
    pub phone: String,
    /// Subject line for the prefilled mailto draft
    #[serde(default = "default_mail_subject")]
    pub mail_subject: String,
    /// Body for the prefilled mailto draft
    #[serde(default = "default_mail_body")]
    pub mail_body: String,
}

fn default_mail_subject() -> String {
    "Contact Request".to_string()
}

fn default_mail_body() -> String {
    "Hi, I would like to get in touch with you.".to_string()
}

/// Top-level site configuration document.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteConfig {
    /// Section animations loaded at startup
    #[serde(default)]
    pub animations: Vec<AnimationSpec>,
    /// Intro animation played on the loading splash (optional; splash
    /// still runs without it)
    #[serde(default)]
    pub intro_animation: Option<AnimationSpec>,
    /// Selector groups registered with the reveal observer
    #[serde(default)]
    pub reveal_selectors: Vec<String>,
    /// Selector matching the decorative shapes moved by parallax and
    /// mouse tracking
    #[serde(default = "default_shape_selector")]
    pub shape_selector: String,
    /// Contact form and affordance settings
    pub contact: ContactConfig,
    /// Splash sequence timings
    #[serde(default)]
    pub loading: LoadingSchedule,
}

fn default_shape_selector() -> String {
    ".shape, .sphere, .visual-shape".to_string()
}

impl SiteConfig {
    /// Parse a configuration document. Unknown fields are ignored so the
    /// asset can grow ahead of the code.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "contact": {
            "form_endpoint": "https://relay.example/ajax/hello@example.com",
            "email": "hello@example.com",
            "phone": "+10000000000"
        }
    }"#;

    #[test]
    fn minimal_config_parses_with_defaults() {
        let config = SiteConfig::from_json(MINIMAL).unwrap();
        assert!(config.animations.is_empty());
        assert!(config.intro_animation.is_none());
        assert_eq!(config.shape_selector, ".shape, .sphere, .visual-shape");
        assert_eq!(config.contact.mail_subject, "Contact Request");
        assert_eq!(config.loading, LoadingSchedule::default());
    }

    #[test]
    fn full_config_parses() {
        let json = r#"{
            "animations": [
                { "container_id": "heroLottie", "path": "assets/hero.json" },
                { "container_id": "servicesLottie", "path": "assets/services.json" }
            ],
            "intro_animation": { "container_id": "lottie-container", "path": "assets/intro.json" },
            "reveal_selectors": [".service-card", ".shape"],
            "shape_selector": ".shape",
            "contact": {
                "form_endpoint": "https://relay.example/ajax/x",
                "email": "x@example.com",
                "phone": "+1",
                "mail_subject": "Hello",
                "mail_body": "Hi there"
            },
            "loading": { "pulse_ms": 100, "zoom_ms": 200, "complete_ms": 300, "cleanup_delay_ms": 50 }
        }"#;
        let config = SiteConfig::from_json(json).unwrap();
        assert_eq!(config.animations.len(), 2);
        assert_eq!(config.animations[0].container_id, "heroLottie");
        assert_eq!(
            config.intro_animation.as_ref().unwrap().path,
            "assets/intro.json"
        );
        assert_eq!(config.reveal_selectors.len(), 2);
        assert_eq!(config.contact.mail_subject, "Hello");
        assert_eq!(config.loading.pulse_ms, 100.0);
        assert_eq!(config.loading.cleanup_delay_ms, 50.0);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{
            "theme": "midnight",
            "contact": {
                "form_endpoint": "e",
                "email": "a",
                "phone": "p",
                "fax": "none"
            }
        }"#;
        assert!(SiteConfig::from_json(json).is_ok());
    }

    #[test]
    fn missing_contact_is_an_error() {
        assert!(SiteConfig::from_json("{}").is_err());
    }
}

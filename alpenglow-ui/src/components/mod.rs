pub mod contact_modal;
pub mod footer;
pub mod header;
pub mod hero;
pub mod loading_overlay;
pub mod sections;

pub use contact_modal::ContactModal;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use loading_overlay::LoadingOverlay;
pub use sections::{ArtDirection, ContactSection, Services, WhatWeDo};

//! Literal values used by both renderers when a property was not found.

pub const BUTTON_LABEL: &str = "Button";
pub const INPUT_PLACEHOLDER: &str = "Enter text...";
pub const CARD_TITLE: &str = "Card Title";
pub const CARD_CONTENT: &str = "Card content goes here";
pub const NAVBAR_TITLE: &str = "Site Name";
pub const NAVBAR_LINKS: &[&str] = &["Home", "About", "Contact"];
pub const FORM_SUBMIT: &str = "Submit";
pub const HERO_TITLE: &str = "Welcome to our site";
pub const HERO_SUBTITLE: &str = "This is a hero section for your website";
pub const HERO_BUTTON: &str = "Get Started";
pub const GALLERY_TILES: usize = 3;
pub const TESTIMONIAL_QUOTE: &str =
    "This product is amazing! I would definitely recommend it to anyone.";
pub const TESTIMONIAL_AUTHOR: &str = "Jane Doe";
pub const TESTIMONIAL_ROLE: &str = "Customer";
pub const TESTIMONIAL_INITIAL: char = 'J';

pub const EMPTY_PREVIEW: &str = "Enter a UI description to generate components";

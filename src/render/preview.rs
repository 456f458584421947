//! Structural preview: each descriptor resolved into a widget with every
//! absent property replaced by its default.

use crate::domain::model::{ComponentDescriptor, ComponentKind, PropertyBag};
use crate::domain::ports::Renderer;
use crate::render::defaults;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub label: String,
    pub input_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum Widget {
    Button {
        label: String,
    },
    TextInput {
        placeholder: String,
    },
    Card {
        title: String,
        content: String,
    },
    Navbar {
        title: String,
        links: Vec<String>,
    },
    Form {
        fields: Vec<FormField>,
        submit_text: String,
    },
    Hero {
        title: String,
        subtitle: String,
        button_text: String,
    },
    Gallery {
        tiles: Vec<String>,
    },
    Testimonial {
        quote: String,
        author: String,
        role: String,
        initial: char,
    },
}

fn resolve(props: &PropertyBag, name: &str, default: &str) -> String {
    props.get(name).unwrap_or(default).to_string()
}

impl Widget {
    pub fn from_descriptor(descriptor: &ComponentDescriptor) -> Self {
        let props = descriptor.properties();
        match descriptor.kind() {
            ComponentKind::Button => Widget::Button {
                label: resolve(props, "label", defaults::BUTTON_LABEL),
            },
            ComponentKind::Input => Widget::TextInput {
                placeholder: resolve(props, "placeholder", defaults::INPUT_PLACEHOLDER),
            },
            ComponentKind::Card => Widget::Card {
                title: resolve(props, "title", defaults::CARD_TITLE),
                content: resolve(props, "content", defaults::CARD_CONTENT),
            },
            ComponentKind::Navbar => Widget::Navbar {
                title: resolve(props, "title", defaults::NAVBAR_TITLE),
                links: defaults::NAVBAR_LINKS.iter().map(|l| l.to_string()).collect(),
            },
            ComponentKind::Form => Widget::Form {
                fields: vec![
                    FormField {
                        label: "Email".to_string(),
                        input_type: "email".to_string(),
                    },
                    FormField {
                        label: "Password".to_string(),
                        input_type: "password".to_string(),
                    },
                ],
                submit_text: resolve(props, "submitText", defaults::FORM_SUBMIT),
            },
            ComponentKind::Hero => Widget::Hero {
                title: resolve(props, "title", defaults::HERO_TITLE),
                subtitle: resolve(props, "subtitle", defaults::HERO_SUBTITLE),
                button_text: resolve(props, "buttonText", defaults::HERO_BUTTON),
            },
            ComponentKind::Gallery => Widget::Gallery {
                tiles: (1..=defaults::GALLERY_TILES)
                    .map(|n| format!("Image {}", n))
                    .collect(),
            },
            ComponentKind::Testimonial => {
                let author = resolve(props, "author", defaults::TESTIMONIAL_AUTHOR);
                let initial = author.chars().next().unwrap_or(defaults::TESTIMONIAL_INITIAL);
                Widget::Testimonial {
                    quote: resolve(props, "quote", defaults::TESTIMONIAL_QUOTE),
                    author,
                    role: resolve(props, "role", defaults::TESTIMONIAL_ROLE),
                    initial,
                }
            }
        }
    }
}

impl fmt::Display for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Widget::Button { label } => write!(f, "[ {} ]", label),
            Widget::TextInput { placeholder } => write!(f, "|_ {} _|", placeholder),
            Widget::Card { title, content } => {
                writeln!(f, "+ {}", title)?;
                write!(f, "  {}", content)
            }
            Widget::Navbar { title, links } => write!(f, "{}    {}", title, links.join(" | ")),
            Widget::Form { fields, submit_text } => {
                for field in fields {
                    writeln!(f, "{}: |_ ({}) _|", field.label, field.input_type)?;
                }
                write!(f, "[ {} ]", submit_text)
            }
            Widget::Hero {
                title,
                subtitle,
                button_text,
            } => {
                writeln!(f, "# {}", title)?;
                writeln!(f, "  {}", subtitle)?;
                write!(f, "  [ {} ]", button_text)
            }
            Widget::Gallery { tiles } => {
                let cells: Vec<String> = tiles.iter().map(|t| format!("[{}]", t)).collect();
                write!(f, "{}", cells.join(" "))
            }
            Widget::Testimonial {
                quote,
                author,
                role,
                initial,
            } => {
                writeln!(f, "\"{}\"", quote)?;
                write!(f, "  ({}) {}, {}", initial, author, role)
            }
        }
    }
}

/// The rendered widgets of one extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub widgets: Vec<Widget>,
}

impl Preview {
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.widgets.is_empty() {
            return write!(f, "{}", defaults::EMPTY_PREVIEW);
        }

        for (index, widget) in self.widgets.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
                writeln!(f)?;
            }
            write!(f, "{}", widget)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewRenderer;

impl Renderer for PreviewRenderer {
    type Output = Preview;

    fn render(&self, components: &[ComponentDescriptor]) -> Preview {
        Preview {
            widgets: components.iter().map(Widget::from_descriptor).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(kind: ComponentKind, props: &[(&str, Option<&str>)]) -> ComponentDescriptor {
        let mut bag = PropertyBag::new();
        for (name, value) in props {
            bag.insert(*name, value.map(str::to_string));
        }
        ComponentDescriptor::new(kind, bag)
    }

    #[test]
    fn test_absent_properties_use_defaults() {
        let widget = Widget::from_descriptor(&descriptor(
            ComponentKind::Hero,
            &[("title", Some("Hi")), ("subtitle", None)],
        ));
        assert_eq!(
            widget,
            Widget::Hero {
                title: "Hi".to_string(),
                subtitle: defaults::HERO_SUBTITLE.to_string(),
                button_text: defaults::HERO_BUTTON.to_string(),
            }
        );
    }

    #[test]
    fn test_testimonial_initial() {
        let named = Widget::from_descriptor(&descriptor(
            ComponentKind::Testimonial,
            &[("author", Some("Sam Lee"))],
        ));
        assert!(matches!(named, Widget::Testimonial { initial: 'S', .. }));

        let anonymous = Widget::from_descriptor(&descriptor(ComponentKind::Testimonial, &[]));
        assert!(matches!(anonymous, Widget::Testimonial { initial: 'J', ref author, .. } if author == "Jane Doe"));
    }

    #[test]
    fn test_gallery_tiles() {
        let widget = Widget::from_descriptor(&descriptor(ComponentKind::Gallery, &[]));
        assert_eq!(widget.to_string(), "[Image 1] [Image 2] [Image 3]");
    }

    #[test]
    fn test_empty_preview_message() {
        let preview = PreviewRenderer.render(&[]);
        assert!(preview.is_empty());
        assert_eq!(preview.to_string(), defaults::EMPTY_PREVIEW);
    }

    #[test]
    fn test_preview_separates_widgets() {
        let preview = PreviewRenderer.render(&[
            descriptor(ComponentKind::Button, &[("label", Some("Go"))]),
            descriptor(ComponentKind::Input, &[]),
        ]);
        assert_eq!(preview.to_string(), "[ Go ]\n\n|_ Enter text... _|");
    }
}

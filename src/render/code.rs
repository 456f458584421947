//! React/JSX source generation for a descriptor list.

use crate::domain::model::{ComponentDescriptor, ComponentKind, PropertyBag, RawComponent};
use crate::domain::ports::Renderer;
use crate::render::defaults;

pub const DEFAULT_COMPONENT_NAME: &str = "GeneratedComponent";
pub const EMPTY_OUTPUT: &str = "// No components generated yet";

#[derive(Debug, Clone)]
pub struct CodeEmitter {
    component_name: String,
}

impl Default for CodeEmitter {
    fn default() -> Self {
        Self::new(DEFAULT_COMPONENT_NAME)
    }
}

impl CodeEmitter {
    pub fn new(component_name: impl Into<String>) -> Self {
        Self {
            component_name: component_name.into(),
        }
    }

    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    /// Source for an unchecked descriptor list; unknown kinds become a comment.
    pub fn emit_raw(&self, components: &[RawComponent]) -> String {
        if components.is_empty() {
            return EMPTY_OUTPUT.to_string();
        }

        let mut code = String::from("import React from \"react\";\n\n");
        code.push_str(&format!("const {} = () => {{\n", self.component_name));
        code.push_str("  return (\n");

        if let [single] = components {
            code.push_str(&emit_component(&single.kind, &single.properties, 4));
        } else {
            code.push_str("    <div className=\"space-y-4\">\n");
            for component in components {
                code.push_str(&emit_component(&component.kind, &component.properties, 6));
            }
            code.push_str("    </div>\n");
        }

        code.push_str("  );\n");
        code.push_str("};\n\n");
        code.push_str(&format!("export default {};", self.component_name));
        code
    }

    pub fn emit(&self, components: &[ComponentDescriptor]) -> String {
        let raw: Vec<RawComponent> = components.iter().map(RawComponent::from).collect();
        self.emit_raw(&raw)
    }
}

impl Renderer for CodeEmitter {
    type Output = String;

    fn render(&self, components: &[ComponentDescriptor]) -> String {
        self.emit(components)
    }
}

fn prop<'a>(props: &'a PropertyBag, name: &str, default: &'a str) -> &'a str {
    props.get(name).unwrap_or(default)
}

/// Markup for one component, every line prefixed with `indent` spaces.
pub fn emit_component(kind: &str, props: &PropertyBag, indent: usize) -> String {
    let i = " ".repeat(indent);

    let Ok(kind) = kind.parse::<ComponentKind>() else {
        tracing::warn!("no code template for component kind '{}'", kind);
        return format!("{i}<!-- Unknown component type: {kind} -->\n");
    };

    match kind {
        ComponentKind::Button => {
            let label = prop(props, "label", defaults::BUTTON_LABEL);
            format!(
                "{i}<button className=\"px-4 py-2 bg-blue-500 text-white rounded-md hover:bg-blue-600 transition-colors\">\n\
                 {i}  {label}\n\
                 {i}</button>\n"
            )
        }
        ComponentKind::Input => {
            let placeholder = prop(props, "placeholder", defaults::INPUT_PLACEHOLDER);
            format!(
                "{i}<input\n\
                 {i}  type=\"text\"\n\
                 {i}  placeholder=\"{placeholder}\"\n\
                 {i}  className=\"p-2 border rounded-md w-full focus:outline-none focus:ring-2 focus:ring-blue-500\"\n\
                 {i}/>\n"
            )
        }
        ComponentKind::Card => {
            let title = prop(props, "title", defaults::CARD_TITLE);
            let content = prop(props, "content", defaults::CARD_CONTENT);
            format!(
                "{i}<div className=\"bg-white dark:bg-gray-800 rounded-lg shadow-md p-4 max-w-sm\">\n\
                 {i}  <h3 className=\"text-lg font-bold mb-2\">{title}</h3>\n\
                 {i}  <p className=\"text-gray-600 dark:text-gray-300\">{content}</p>\n\
                 {i}</div>\n"
            )
        }
        ComponentKind::Navbar => {
            let title = prop(props, "title", defaults::NAVBAR_TITLE);
            let links = defaults::NAVBAR_LINKS
                .iter()
                .map(|l| format!("'{l}'"))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "{i}<nav className=\"bg-white dark:bg-gray-800 shadow-md p-4\">\n\
                 {i}  <div className=\"flex justify-between items-center\">\n\
                 {i}    <div className=\"font-bold text-xl\">{title}</div>\n\
                 {i}    <div className=\"flex space-x-4\">\n\
                 {i}      {{[{links}].map((link, i) => (\n\
                 {i}        <a key={{i}} href=\"#\" className=\"hover:text-blue-500\">{{link}}</a>\n\
                 {i}      ))}}\n\
                 {i}    </div>\n\
                 {i}  </div>\n\
                 {i}</nav>\n"
            )
        }
        ComponentKind::Form => {
            let submit = prop(props, "submitText", defaults::FORM_SUBMIT);
            format!(
                "{i}<form className=\"space-y-4 max-w-md\">\n\
                 {i}  <div>\n\
                 {i}    <label className=\"block text-sm font-medium mb-1\">Email</label>\n\
                 {i}    <input type=\"email\" className=\"p-2 border rounded-md w-full focus:outline-none focus:ring-2 focus:ring-blue-500\" />\n\
                 {i}  </div>\n\
                 {i}  <div>\n\
                 {i}    <label className=\"block text-sm font-medium mb-1\">Password</label>\n\
                 {i}    <input type=\"password\" className=\"p-2 border rounded-md w-full focus:outline-none focus:ring-2 focus:ring-blue-500\" />\n\
                 {i}  </div>\n\
                 {i}  <button type=\"submit\" className=\"px-4 py-2 bg-blue-500 text-white rounded-md hover:bg-blue-600 w-full\">\n\
                 {i}    {submit}\n\
                 {i}  </button>\n\
                 {i}</form>\n"
            )
        }
        ComponentKind::Hero => {
            let title = prop(props, "title", defaults::HERO_TITLE);
            let subtitle = prop(props, "subtitle", defaults::HERO_SUBTITLE);
            let button = prop(props, "buttonText", defaults::HERO_BUTTON);
            format!(
                "{i}<div className=\"text-center py-12 px-4\">\n\
                 {i}  <h1 className=\"text-4xl font-bold mb-4\">{title}</h1>\n\
                 {i}  <p className=\"text-lg text-gray-600 dark:text-gray-300 mb-6\">{subtitle}</p>\n\
                 {i}  <button className=\"px-6 py-3 bg-blue-500 text-white rounded-md hover:bg-blue-600 transition-colors\">\n\
                 {i}    {button}\n\
                 {i}  </button>\n\
                 {i}</div>\n"
            )
        }
        ComponentKind::Gallery => format!(
            "{i}<div className=\"grid grid-cols-1 md:grid-cols-3 gap-4 p-4\">\n\
             {i}  {{[1, 2, 3].map((item, i) => (\n\
             {i}    <div key={{i}} className=\"aspect-square bg-gray-200 dark:bg-gray-700 rounded-lg flex items-center justify-center\">\n\
             {i}      <span className=\"text-gray-500 dark:text-gray-400\">Image {{item}}</span>\n\
             {i}    </div>\n\
             {i}  ))}}\n\
             {i}</div>\n"
        ),
        ComponentKind::Testimonial => {
            let quote = prop(props, "quote", defaults::TESTIMONIAL_QUOTE);
            let author = prop(props, "author", defaults::TESTIMONIAL_AUTHOR);
            let role = prop(props, "role", defaults::TESTIMONIAL_ROLE);
            format!(
                "{i}<div className=\"bg-white dark:bg-gray-800 p-6 rounded-lg shadow-md\">\n\
                 {i}  <p className=\"italic mb-4 text-gray-600 dark:text-gray-300\">\"{quote}\"</p>\n\
                 {i}  <div className=\"flex items-center\">\n\
                 {i}    <div className=\"w-10 h-10 bg-gray-300 dark:bg-gray-600 rounded-full mr-3\"></div>\n\
                 {i}    <div>\n\
                 {i}      <p className=\"font-medium\">{author}</p>\n\
                 {i}      <p className=\"text-sm text-gray-500 dark:text-gray-400\">{role}</p>\n\
                 {i}    </div>\n\
                 {i}  </div>\n\
                 {i}</div>\n"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(label: Option<&str>) -> ComponentDescriptor {
        let mut bag = PropertyBag::new();
        bag.insert("label", label.map(str::to_string));
        ComponentDescriptor::new(ComponentKind::Button, bag)
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(CodeEmitter::default().emit(&[]), EMPTY_OUTPUT);
    }

    #[test]
    fn test_single_component_is_not_wrapped() {
        let code = CodeEmitter::default().emit(&[button(Some("Go"))]);
        let expected = concat!(
            "import React from \"react\";\n\n",
            "const GeneratedComponent = () => {\n",
            "  return (\n",
            "    <button className=\"px-4 py-2 bg-blue-500 text-white rounded-md hover:bg-blue-600 transition-colors\">\n",
            "      Go\n",
            "    </button>\n",
            "  );\n",
            "};\n\n",
            "export default GeneratedComponent;",
        );
        assert_eq!(code, expected);
    }

    #[test]
    fn test_multiple_components_are_wrapped() {
        let code = CodeEmitter::new("Landing").emit(&[button(None), button(Some("Two"))]);
        assert!(code.contains("    <div className=\"space-y-4\">\n      <button"));
        assert!(code.contains("\n        Button\n"));
        assert!(code.contains("\n        Two\n"));
        assert!(code.ends_with("export default Landing;"));
    }

    #[test]
    fn test_empty_value_is_kept() {
        let code = emit_component("button", &PropertyBag::new().with("label", ""), 0);
        assert!(code.contains("\n  \n"));
        assert!(!code.contains("Button\n"));
    }

    #[test]
    fn test_unknown_kind_placeholder() {
        assert_eq!(
            emit_component("carousel", &PropertyBag::new(), 2),
            "  <!-- Unknown component type: carousel -->\n"
        );
    }

    #[test]
    fn test_navbar_links_literal() {
        let code = emit_component("navbar", &PropertyBag::new(), 0);
        assert!(code.contains("{['Home', 'About', 'Contact'].map((link, i) => ("));
        assert!(code.contains("<a key={i} href=\"#\""));
    }
}

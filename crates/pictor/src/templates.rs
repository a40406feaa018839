//! Fixed prompt templates for common image-generation styles.

/// A named prompt template. The customization text is appended to the base
/// prompt when the template is used.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub name: &'static str,
    pub prompt: &'static str,
    pub description: &'static str,
}

/// The closed template catalog, addressed by name.
pub static TEMPLATES: [Template; 10] = [
    Template {
        name: "logo",
        prompt: "Design a clean, modern, minimalist logo on a plain background",
        description: "Minimalist logo design",
    },
    Template {
        name: "banner",
        prompt: "Create a wide promotional banner with bold typography and vivid colors",
        description: "Wide promotional banner",
    },
    Template {
        name: "icon",
        prompt: "Design a simple flat-style app icon with rounded corners",
        description: "Flat app icon",
    },
    Template {
        name: "illustration",
        prompt: "Create a detailed digital illustration with rich colors and soft lighting",
        description: "Detailed digital illustration",
    },
    Template {
        name: "product",
        prompt: "Render a professional product photograph on a neutral studio background",
        description: "Studio product shot",
    },
    Template {
        name: "avatar",
        prompt: "Create a stylized character avatar portrait, head and shoulders, friendly expression",
        description: "Stylized avatar portrait",
    },
    Template {
        name: "poster",
        prompt: "Design an eye-catching poster with a strong focal point and clear visual hierarchy",
        description: "Eye-catching poster",
    },
    Template {
        name: "sticker",
        prompt: "Create a die-cut sticker design with a thick white border and glossy finish",
        description: "Die-cut sticker",
    },
    Template {
        name: "pattern",
        prompt: "Create a seamless repeating pattern with balanced spacing",
        description: "Seamless repeating pattern",
    },
    Template {
        name: "thumbnail",
        prompt: "Design a bold, high-contrast video thumbnail that reads well at small sizes",
        description: "High-contrast video thumbnail",
    },
];

/// Look up a template by name.
pub fn find(name: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.name == name)
}

/// Final prompt sent to the model: template text, a period separator, then
/// the caller's customization.
pub fn compose_prompt(template: &Template, customization: &str) -> String {
    format!("{}. {}", template.prompt, customization)
}

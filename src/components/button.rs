use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Solid gold gradient, the primary call to action.
    Chronos,
    /// Glassy outline.
    Ethereal,
    /// Cyan glow used in the navigation bar.
    Energy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    Xl,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Chronos => "btn-chronos",
            ButtonVariant::Ethereal => "btn-ethereal",
            ButtonVariant::Energy => "btn-energy",
        }
    }
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Xl => "btn-xl",
        }
    }
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let mut class = format!("btn {} {}", variant.class(), size.class());
    if !extra.trim().is_empty() {
        class.push(' ');
        class.push_str(extra.trim());
    }
    class
}

#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[prop(optional, into)] extra_class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <button type="button" class=button_class(variant, size, &extra_class)>
            {children()}
        </button>
    }
}

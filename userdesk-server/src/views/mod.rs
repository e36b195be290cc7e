//! FastUI view descriptions
//!
//! Handlers answer with a JSON component tree that the prebuilt FastUI
//! front-end renders. Only the components this service emits are modelled.
//! Keys are camelCase and absent optional fields are omitted.

pub mod pages;
pub mod shell;

use serde::Serialize;
use serde_json::Value;

pub use pages::{add_user_page, user_page, users_page};
pub use shell::prebuilt_html;

/// Client-side navigation triggered by a click or a form response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum PageEvent {
    #[serde(rename = "go-to")]
    GoTo { url: String },
    #[serde(rename = "back")]
    Back,
}

impl PageEvent {
    pub fn go_to(url: impl Into<String>) -> Self {
        Self::GoTo { url: url.into() }
    }
}

/// How a looked-up field is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    Auto,
    Plain,
    Date,
}

/// A column of a table or a row of a details view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayLookup {
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<DisplayMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<PageEvent>,
}

impl DisplayLookup {
    pub fn field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            title: None,
            mode: None,
            on_click: None,
        }
    }

    pub fn mode(mut self, mode: DisplayMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn on_click(mut self, event: PageEvent) -> Self {
        self.on_click = Some(event);
        self
    }
}

/// HTML input flavour for text-like form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Date,
}

/// A field inside a `ModelForm`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum FormField {
    FormFieldInput {
        name: String,
        title: Vec<String>,
        required: bool,
        locked: bool,
        html_type: InputType,
    },
    FormFieldBoolean {
        name: String,
        title: Vec<String>,
        required: bool,
        locked: bool,
        mode: &'static str,
    },
}

impl FormField {
    pub fn input(name: &str, title: &str, html_type: InputType) -> Self {
        Self::FormFieldInput {
            name: name.to_owned(),
            title: vec![title.to_owned()],
            required: true,
            locked: false,
            html_type,
        }
    }

    /// Checkbox the browser insists on being ticked before submitting.
    pub fn checkbox(name: &str, title: &str) -> Self {
        Self::FormFieldBoolean {
            name: name.to_owned(),
            title: vec![title.to_owned()],
            required: true,
            locked: false,
            mode: "checkbox",
        }
    }
}

/// A node of the component tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Component {
    Page {
        components: Vec<Component>,
    },
    Heading {
        text: String,
        level: u8,
    },
    Paragraph {
        text: String,
    },
    Text {
        text: String,
    },
    Button {
        text: String,
    },
    Div {
        components: Vec<Component>,
        #[serde(skip_serializing_if = "Option::is_none")]
        class_name: Option<String>,
    },
    Link {
        components: Vec<Component>,
        on_click: PageEvent,
    },
    Table {
        data: Vec<Value>,
        columns: Vec<DisplayLookup>,
    },
    Details {
        data: Value,
        fields: Vec<DisplayLookup>,
    },
    ModelForm {
        submit_url: String,
        method: &'static str,
        form_fields: Vec<FormField>,
        #[serde(skip_serializing_if = "Option::is_none")]
        class_name: Option<String>,
    },
}

impl Component {
    pub fn page(components: Vec<Component>) -> Self {
        Self::Page { components }
    }

    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Self::Heading {
            text: text.into(),
            level,
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn button(text: impl Into<String>) -> Self {
        Self::Button { text: text.into() }
    }

    pub fn div(components: Vec<Component>) -> Self {
        Self::Div {
            components,
            class_name: None,
        }
    }

    pub fn link(components: Vec<Component>, on_click: PageEvent) -> Self {
        Self::Link {
            components,
            on_click,
        }
    }

    pub fn form(submit_url: impl Into<String>, form_fields: Vec<FormField>) -> Self {
        Self::ModelForm {
            submit_url: submit_url.into(),
            method: "POST",
            form_fields,
            class_name: None,
        }
    }

    /// Set the CSS class on a `Div` or `ModelForm`; other components ignore it.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        if let Self::Div { class_name, .. } | Self::ModelForm { class_name, .. } = &mut self {
            *class_name = Some(class.into());
        }
        self
    }
}

/// Reply to a form submission telling the client where to go next
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormResponse {
    #[serde(rename = "type")]
    kind: &'static str,
    pub event: PageEvent,
}

impl FormResponse {
    pub fn new(event: PageEvent) -> Self {
        Self {
            kind: "FormResponse",
            event,
        }
    }

    pub fn go_to(url: impl Into<String>) -> Self {
        Self::new(PageEvent::go_to(url))
    }
}

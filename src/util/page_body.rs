//! Mutations applied to the page `<body>`.
//!
//! Only two things on the body are ever written: the marker class and the
//! inline `background` style. The only read is the config attribute at load.

#[cfg(test)]
#[path = "page_body_test.rs"]
mod page_body_test;

/// Body attribute holding an optional JSON toggle config.
pub const CONFIG_ATTRIBUTE: &str = "data-theme-toggle";

/// Body mutation capability.
pub trait PageBody {
    /// Add (`present = true`) or remove the class `class`.
    fn set_marker(&self, class: &str, present: bool);

    /// Set the inline `background` style.
    fn set_background(&self, value: &str);
}

/// `document.body` of the current window. No-op without `hydrate`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentBody;

impl DocumentBody {
    pub fn new() -> Self {
        Self
    }

    /// Raw value of the body's `data-theme-toggle` attribute, if present.
    pub fn config_attribute() -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            Self::element().and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    #[cfg(feature = "hydrate")]
    fn element() -> Option<web_sys::HtmlElement> {
        web_sys::window().and_then(|w| w.document()).and_then(|d| d.body())
    }
}

impl PageBody for DocumentBody {
    fn set_marker(&self, class: &str, present: bool) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(body) = Self::element() {
                let class_list = body.class_list();
                if present {
                    let _ = class_list.add_1(class);
                } else {
                    let _ = class_list.remove_1(class);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (class, present);
        }
    }

    fn set_background(&self, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(body) = Self::element() {
                let _ = body.style().set_property("background", value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    }
}

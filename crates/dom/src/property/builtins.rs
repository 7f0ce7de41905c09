//! Built-in generic-markup property rules.
//!
//! This is the default rule set a [`crate::PropertyRegistry`] is seeded
//! with. The namespaced vector-graphics vocabulary lives in
//! [`crate::property::svg`] and is merged by collaborators via `inject`.

use crate::element::HostElement;
use crate::property::rule::BindingRule;
use crate::value::Value;

/// Some hosts stringify a null class property to `"null"`; write falsy
/// values as the empty string instead. Documented one-property exception
/// to the normal coercion table.
fn set_class_name(element: &mut dyn HostElement, value: &Value) {
	if value.is_falsy() {
		element.set_property("className", &Value::Str(String::new()));
	} else {
		element.set_property("className", value);
	}
}

/// The default generic-markup rule set.
///
/// Storage defaults to the property slot; entries deviate where the host
/// platform is irregular (boolean attributes, wire-name aliases,
/// positive-numeric sizes, the side-effecting `value` write).
#[rustfmt::skip]
pub fn rule_set() -> Vec<(&'static str, BindingRule)> {
	vec![
		// Standard properties
		("accept", BindingRule::property()),
		("accessKey", BindingRule::property()),
		("action", BindingRule::property()),
		("allowFullScreen", BindingRule::attribute().boolean().alias("allowfullscreen")),
		("allowTransparency", BindingRule::attribute().alias("allowtransparency")),
		("alt", BindingRule::property()),
		("async", BindingRule::property().boolean()),
		("autoComplete", BindingRule::property().property_alias("autocomplete")),
		// autoFocus is normalized by the focus mixin upstream, not written
		// through the registry.
		("autoPlay", BindingRule::property().boolean().property_alias("autoplay")),
		("cellPadding", BindingRule::property()),
		("cellSpacing", BindingRule::property()),
		("charSet", BindingRule::attribute().alias("charset")),
		("checked", BindingRule::property().boolean()),
		("className", BindingRule::attribute().alias("class").mutator(set_class_name)),
		("cols", BindingRule::attribute().positive_numeric()),
		("colSpan", BindingRule::property()),
		("content", BindingRule::property()),
		("contentEditable", BindingRule::property()),
		("contextMenu", BindingRule::attribute().alias("contextmenu")),
		("controls", BindingRule::property().boolean()),
		("crossOrigin", BindingRule::property()),
		("data", BindingRule::property()), // acts as `src` on <object>
		("dateTime", BindingRule::attribute().alias("datetime")),
		("defer", BindingRule::property().boolean()),
		("dir", BindingRule::property()),
		("disabled", BindingRule::attribute().boolean()),
		("download", BindingRule::property().overloaded_boolean()),
		("draggable", BindingRule::property()),
		("encType", BindingRule::property().property_alias("enctype")),
		("form", BindingRule::attribute()),
		("formNoValidate", BindingRule::property().boolean()),
		("frameBorder", BindingRule::attribute().alias("frameborder")),
		("height", BindingRule::attribute()),
		("hidden", BindingRule::attribute().boolean()),
		("href", BindingRule::property()),
		("hrefLang", BindingRule::property().property_alias("hreflang")),
		("htmlFor", BindingRule::property().alias("for")),
		("httpEquiv", BindingRule::property().alias("http-equiv")),
		("icon", BindingRule::property()),
		("id", BindingRule::property()),
		("label", BindingRule::property()),
		("lang", BindingRule::property()),
		("list", BindingRule::property()),
		("loop", BindingRule::property().boolean()),
		("max", BindingRule::property()),
		("maxLength", BindingRule::attribute().alias("maxlength")),
		("mediaGroup", BindingRule::property()),
		("method", BindingRule::property()),
		("min", BindingRule::property()),
		("multiple", BindingRule::property().boolean()),
		("muted", BindingRule::property().boolean()),
		("name", BindingRule::property()),
		("noValidate", BindingRule::property().boolean()),
		("pattern", BindingRule::property()),
		("placeholder", BindingRule::property()),
		("poster", BindingRule::property()),
		("preload", BindingRule::property()),
		("radioGroup", BindingRule::property().property_alias("radiogroup")),
		("readOnly", BindingRule::property().boolean()),
		("rel", BindingRule::property()),
		("required", BindingRule::property().boolean()),
		("role", BindingRule::attribute()),
		("rows", BindingRule::attribute().positive_numeric()),
		("rowSpan", BindingRule::property()),
		("sandbox", BindingRule::property()),
		("scope", BindingRule::property()),
		("scrollLeft", BindingRule::property()),
		("scrolling", BindingRule::property()),
		("scrollTop", BindingRule::property()),
		("seamless", BindingRule::attribute().boolean()),
		("selected", BindingRule::property().boolean()),
		("size", BindingRule::attribute().positive_numeric()),
		("span", BindingRule::property().positive_numeric()),
		("spellCheck", BindingRule::property().property_alias("spellcheck")),
		("src", BindingRule::property()),
		("srcDoc", BindingRule::property().property_alias("srcdoc")),
		("srcSet", BindingRule::property().property_alias("srcset")),
		("start", BindingRule::property().numeric()),
		("step", BindingRule::property()),
		("style", BindingRule::property()),
		("tabIndex", BindingRule::property()),
		("target", BindingRule::property()),
		("title", BindingRule::property()),
		("type", BindingRule::property()),
		("value", BindingRule::property().side_effects()),
		("width", BindingRule::attribute()),
		("wmode", BindingRule::attribute()),

		// Non-standard properties
		("autoCapitalize", BindingRule::property().property_alias("autocapitalize")),
		("autoCorrect", BindingRule::property().property_alias("autocorrect")),
		("itemProp", BindingRule::attribute().alias("itemprop")),
		("itemScope", BindingRule::attribute().boolean().alias("itemscope")),
		("itemType", BindingRule::attribute().alias("itemtype")),
		("property", BindingRule::property()), // open-graph <meta> tags
	]
}

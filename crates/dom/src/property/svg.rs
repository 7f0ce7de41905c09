//! Namespaced vector-graphics property rules.
//!
//! Not part of the default seed: hosts that render vector graphics merge
//! this set during setup with [`crate::PropertyRegistry::inject`].
//! Everything here is attribute-stored; logical names are preserved as
//! authored, so only hyphenated wire names and the `xlink`/`xml` namespaced
//! attributes carry aliases.

use crate::property::rule::BindingRule;

pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

fn xlink(wire: &'static str) -> BindingRule {
	BindingRule::namespaced().alias(wire).namespace(XLINK_NAMESPACE)
}

fn xml(wire: &'static str) -> BindingRule {
	BindingRule::namespaced().alias(wire).namespace(XML_NAMESPACE)
}

/// The vector-graphics rule set.
#[rustfmt::skip]
pub fn rule_set() -> Vec<(&'static str, BindingRule)> {
	vec![
		("accentHeight", BindingRule::attribute().alias("accent-height")),
		("accumulate", BindingRule::attribute()),
		("additive", BindingRule::attribute()),
		("alphabetic", BindingRule::attribute()),
		("amplitude", BindingRule::attribute()),
		("arabicForm", BindingRule::attribute().alias("arabic-form")),
		("ascent", BindingRule::attribute()),
		("attributeName", BindingRule::attribute()),
		("attributeType", BindingRule::attribute()),
		("azimuth", BindingRule::attribute()),
		("baseFrequency", BindingRule::attribute()),
		("baseProfile", BindingRule::attribute()),
		("bbox", BindingRule::attribute()),
		("begin", BindingRule::attribute()),
		("bias", BindingRule::attribute()),
		("by", BindingRule::attribute()),
		("calcMode", BindingRule::attribute()),
		("capHeight", BindingRule::attribute().alias("cap-height")),
		("clipPathUnits", BindingRule::attribute()),
		("contentScriptType", BindingRule::attribute()),
		("contentStyleType", BindingRule::attribute()),
		("cursor", BindingRule::attribute()),
		("cx", BindingRule::attribute()),
		("cy", BindingRule::attribute()),
		("d", BindingRule::attribute()),
		("descent", BindingRule::attribute()),
		("diffuseConstant", BindingRule::attribute()),
		("divisor", BindingRule::attribute()),
		("dur", BindingRule::attribute()),
		("dx", BindingRule::attribute()),
		("dy", BindingRule::attribute()),
		("edgeMode", BindingRule::attribute()),
		("elevation", BindingRule::attribute()),
		("end", BindingRule::attribute()),
		("exponent", BindingRule::attribute()),
		("externalResourcesRequired", BindingRule::attribute()),
		("fill", BindingRule::attribute()),
		("filterRes", BindingRule::attribute()),
		("filterUnits", BindingRule::attribute()),
		("format", BindingRule::attribute()),
		("from", BindingRule::attribute()),
		("fx", BindingRule::attribute()),
		("fy", BindingRule::attribute()),
		("g1", BindingRule::attribute()),
		("g2", BindingRule::attribute()),
		("glyphName", BindingRule::attribute().alias("glyph-name")),
		("glyphRef", BindingRule::attribute()),
		("gradientTransform", BindingRule::attribute()),
		("gradientUnits", BindingRule::attribute()),
		("hanging", BindingRule::attribute()),
		("horizAdvX", BindingRule::attribute().alias("horiz-adv-x")),
		("horizOriginX", BindingRule::attribute().alias("horiz-origin-x")),
		("horizOriginY", BindingRule::attribute().alias("horiz-origin-y")),
		("ideographic", BindingRule::attribute()),
		// `in` is a reserved word in most descriptor layers, hence svgIn.
		("svgIn", BindingRule::attribute().alias("in")),
		("in2", BindingRule::attribute()),
		("intercept", BindingRule::attribute()),
		("k", BindingRule::attribute()),
		("k1", BindingRule::attribute()),
		("k2", BindingRule::attribute()),
		("k3", BindingRule::attribute()),
		("k4", BindingRule::attribute()),
		("kernelMatrix", BindingRule::attribute()),
		("kernelUnitLength", BindingRule::attribute()),
		("keyPoints", BindingRule::attribute()),
		("keySplines", BindingRule::attribute()),
		("keyTimes", BindingRule::attribute()),
		("lengthAdjust", BindingRule::attribute()),
		("limitingConeAngle", BindingRule::attribute()),
		("local", BindingRule::attribute()),
		("markerHeight", BindingRule::attribute()),
		("markerUnits", BindingRule::attribute()),
		("markerWidth", BindingRule::attribute()),
		("maskContentUnits", BindingRule::attribute()),
		("maskUnits", BindingRule::attribute()),
		("mathematical", BindingRule::attribute()),
		("media", BindingRule::attribute()),
		("mode", BindingRule::attribute()),
		("numOctaves", BindingRule::attribute()),
		("offset", BindingRule::attribute()),
		("operator", BindingRule::attribute()),
		("order", BindingRule::attribute()),
		("orient", BindingRule::attribute()),
		("orientation", BindingRule::attribute()),
		("origin", BindingRule::attribute()),
		("overlinePosition", BindingRule::attribute().alias("overline-position")),
		("overlineThickness", BindingRule::attribute().alias("overline-thickness")),
		("panose1", BindingRule::attribute().alias("panose-1")),
		("path", BindingRule::attribute()),
		("pathLength", BindingRule::attribute()),
		("patternContentUnits", BindingRule::attribute()),
		("patternTransform", BindingRule::attribute()),
		("patternUnits", BindingRule::attribute()),
		("points", BindingRule::attribute()),
		("pointsAtX", BindingRule::attribute()),
		("pointsAtY", BindingRule::attribute()),
		("pointsAtZ", BindingRule::attribute()),
		("preserveAlpha", BindingRule::attribute()),
		("preserveAspectRatio", BindingRule::attribute()),
		("primitiveUnits", BindingRule::attribute()),
		("r", BindingRule::attribute()),
		("radius", BindingRule::attribute()),
		("refX", BindingRule::attribute()),
		("refY", BindingRule::attribute()),
		("renderingIntent", BindingRule::attribute().alias("rendering-intent")),
		("repeatCount", BindingRule::attribute()),
		("repeatDur", BindingRule::attribute()),
		("repeatExtensions", BindingRule::attribute()),
		("requiredExtensions", BindingRule::attribute()),
		("requiredFeatures", BindingRule::attribute()),
		("restart", BindingRule::attribute()),
		("result", BindingRule::attribute()),
		("rotate", BindingRule::attribute()),
		("rx", BindingRule::attribute()),
		("ry", BindingRule::attribute()),
		("scale", BindingRule::attribute()),
		("seed", BindingRule::attribute()),
		("slope", BindingRule::attribute()),
		("spacing", BindingRule::attribute()),
		("specularConstant", BindingRule::attribute()),
		("specularExponent", BindingRule::attribute()),
		("spreadMethod", BindingRule::attribute()),
		("startOffset", BindingRule::attribute()),
		("stdDeviation", BindingRule::attribute()),
		("stemh", BindingRule::attribute()),
		("stemv", BindingRule::attribute()),
		("stitchTiles", BindingRule::attribute()),
		("strikethroughPosition", BindingRule::attribute().alias("strikethrough-position")),
		("strikethroughThickness", BindingRule::attribute().alias("strikethrough-thickness")),
		("string", BindingRule::attribute()),
		("surfaceScale", BindingRule::attribute()),
		("systemLanguage", BindingRule::attribute()),
		("tableValues", BindingRule::attribute()),
		("targetX", BindingRule::attribute()),
		("targetY", BindingRule::attribute()),
		("textLength", BindingRule::attribute()),
		("to", BindingRule::attribute()),
		("transform", BindingRule::attribute()),
		("u1", BindingRule::attribute()),
		("u2", BindingRule::attribute()),
		("underlinePosition", BindingRule::attribute().alias("underline-position")),
		("underlineThickness", BindingRule::attribute().alias("underline-thickness")),
		("unicode", BindingRule::attribute()),
		("unicodeRange", BindingRule::attribute().alias("unicode-range")),
		("unitsPerEm", BindingRule::attribute().alias("units-per-em")),
		("vAlphabetic", BindingRule::attribute().alias("v-alphabetic")),
		("vHanging", BindingRule::attribute().alias("v-hanging")),
		("vIdeographic", BindingRule::attribute().alias("v-ideographic")),
		("vMathematical", BindingRule::attribute().alias("v-mathematical")),
		("values", BindingRule::attribute()),
		("version", BindingRule::attribute()),
		("vertAdvY", BindingRule::attribute().alias("vert-adv-y")),
		("vertOriginX", BindingRule::attribute().alias("vert-origin-x")),
		("vertOriginY", BindingRule::attribute().alias("vert-origin-y")),
		("viewBox", BindingRule::attribute()),
		("viewTarget", BindingRule::attribute()),
		("widths", BindingRule::attribute()),
		("x", BindingRule::attribute()),
		("x1", BindingRule::attribute()),
		("x2", BindingRule::attribute()),
		("xChannelSelector", BindingRule::attribute()),
		("xHeight", BindingRule::attribute().alias("x-height")),
		("xlinkActuate", xlink("actuate")),
		("xlinkArcrole", xlink("arcrole")),
		("xlinkHref", xlink("href")),
		("xlinkRole", xlink("role")),
		("xlinkShow", xlink("show")),
		("xlinkTitle", xlink("title")),
		("xlinkType", xlink("type")),
		("xmlBase", xml("base")),
		("xmlLang", xml("lang")),
		("xmlSpace", xml("space")),
		("y", BindingRule::attribute()),
		("y1", BindingRule::attribute()),
		("y2", BindingRule::attribute()),
		("yChannelSelector", BindingRule::attribute()),
		("z", BindingRule::attribute()),
		("zoomAndPan", BindingRule::attribute()),
	]
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::property::registry::PropertyRegistry;
	use crate::property::rule::StorageMode;

	#[test]
	fn injects_cleanly_over_the_builtins() {
		let registry = PropertyRegistry::new();
		registry.inject(rule_set()).unwrap();

		let href = registry.resolve("xlinkHref").unwrap();
		assert_eq!(href.storage(), StorageMode::NamespacedAttribute);
		assert_eq!(href.namespace_uri(), Some(XLINK_NAMESPACE));
		assert_eq!(href.wire_name("xlinkHref"), "href");

		let space = registry.resolve("xmlSpace").unwrap();
		assert_eq!(space.namespace_uri(), Some(XML_NAMESPACE));

		let view_box = registry.resolve("viewBox").unwrap();
		assert_eq!(view_box.storage(), StorageMode::Attribute);
		assert_eq!(view_box.wire_name("viewBox"), "viewBox");
	}

	#[test]
	fn every_namespaced_rule_carries_a_uri() {
		for (name, rule) in rule_set() {
			if rule.storage() == StorageMode::NamespacedAttribute {
				assert!(rule.namespace_uri().is_some(), "{name} is missing a namespace");
			}
		}
	}
}

//! Built-in tag vocabulary.

/// Every supported built-in tag with its void-element flag (true when the
/// closing tag is omitted).
#[rustfmt::skip]
pub fn tag_set() -> &'static [(&'static str, bool)] {
	&[
		("a", false),
		("abbr", false),
		("address", false),
		("area", true),
		("article", false),
		("aside", false),
		("audio", false),
		("b", false),
		("base", true),
		("bdi", false),
		("bdo", false),
		("big", false),
		("blockquote", false),
		("body", false),
		("br", true),
		("button", false),
		("canvas", false),
		("caption", false),
		("cite", false),
		("code", false),
		("col", true),
		("colgroup", false),
		("data", false),
		("datalist", false),
		("dd", false),
		("del", false),
		("details", false),
		("dfn", false),
		("div", false),
		("dl", false),
		("dt", false),
		("em", false),
		("embed", true),
		("fieldset", false),
		("figcaption", false),
		("figure", false),
		("footer", false),
		("form", false), // overridden by the form-control wrapper module
		("h1", false),
		("h2", false),
		("h3", false),
		("h4", false),
		("h5", false),
		("h6", false),
		("head", false),
		("header", false),
		("hr", true),
		("html", false),
		("i", false),
		("iframe", false),
		("img", true),
		("input", true),
		("ins", false),
		("kbd", false),
		("keygen", true),
		("label", false),
		("legend", false),
		("li", false),
		("link", true),
		("main", false),
		("map", false),
		("mark", false),
		("menu", false),
		("menuitem", false), // closing tag should be omitted, but that breaks hosts
		("meta", true),
		("meter", false),
		("nav", false),
		("noscript", false),
		("object", false),
		("ol", false),
		("optgroup", false),
		("option", false),
		("output", false),
		("p", false),
		("param", true),
		("pre", false),
		("progress", false),
		("q", false),
		("rp", false),
		("rt", false),
		("ruby", false),
		("s", false),
		("samp", false),
		("script", false),
		("section", false),
		("select", false),
		("small", false),
		("source", true),
		("span", false),
		("strong", false),
		("style", false),
		("sub", false),
		("summary", false),
		("sup", false),
		("table", false),
		("tbody", false),
		("td", false),
		("textarea", false), // overridden by the form-control wrapper module
		("tfoot", false),
		("th", false),
		("thead", false),
		("time", false),
		("title", false),
		("tr", false),
		("track", true),
		("u", false),
		("ul", false),
		("var", false),
		("video", false),
		("wbr", true),

		// Vector graphics
		("altGlyph", false),
		("altGlyphDef", false),
		("altGlyphItem", false),
		("animate", false),
		("animateColor", false),
		("animateMotion", false),
		("animateTransform", false),
		("circle", false),
		("clipPath", false),
		("color-profile", false),
		("cursor", false),
		("defs", false),
		("desc", false),
		("feBlend", false),
		("feColorMatrix", false),
		("feComponentTransfer", false),
		("feComposite", false),
		("feConvolveMatrix", false),
		("feDiffuseLighting", false),
		("feDisplacementMap", false),
		("feDistantLight", false),
		("feFlood", false),
		("feFuncA", false),
		("feFuncB", false),
		("feFuncG", false),
		("feFuncR", false),
		("feGaussianBlur", false),
		("feImage", false),
		("feMerge", false),
		("feMergeNode", false),
		("feMorphology", false),
		("feOffset", false),
		("fePointLight", false),
		("feSpecularLighting", false),
		("feSpotLight", false),
		("feTile", false),
		("feTurbulence", false),
		("filter", false),
		("font", false),
		("font-face", false),
		("font-face-format", false),
		("font-face-name", false),
		("font-face-src", false),
		("font-face-uri", false),
		("foreignObject", false),
		("g", false),
		("glyph", false),
		("glyphRef", false),
		("hkern", false),
		("image", false),
		("line", false),
		("linearGradient", false),
		("marker", false),
		("mask", false),
		("metadata", false),
		("missing-glyph", false),
		("mpath", false),
		("path", false),
		("pattern", false),
		("polygon", false),
		("polyline", false),
		("radialGradient", false),
		("rect", false),
		("set", false),
		("stop", false),
		("switch", false),
		("svg", false),
		("symbol", false),
		("text", false),
		("textPath", false),
		("tref", false),
		("tspan", false),
		("use", false),
		("view", false),
		("vkern", false),
	]
}

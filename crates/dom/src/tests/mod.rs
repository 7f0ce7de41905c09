//! Cross-module scenarios: registries plus write planning end to end.

use crate::element::Props;
use crate::element::testing::{Mutation, RecordingElement};
use crate::property::svg;
use crate::{
	BindingRule, PropertyRegistry, StorageMode, TagFactory, TagRegistry, Value, WriteOp,
	apply_property, plan_write,
};

#[test]
fn class_name_override_scenario() {
	// Seed with property storage, then a collaborator injects the
	// attribute-stored rule with the `class` wire alias.
	let registry = PropertyRegistry::empty();
	registry
		.inject([("className", BindingRule::property())])
		.unwrap();
	registry
		.inject([("className", BindingRule::attribute().alias("class"))])
		.unwrap();

	let rule = registry.resolve("className").unwrap();
	assert_eq!(rule.storage(), StorageMode::Attribute);
	assert_eq!(rule.wire_name("className"), "class");

	assert_eq!(
		plan_write("className", &rule, &Value::from("nav")).unwrap(),
		WriteOp::SetAttribute {
			name: "class".into(),
			text: "nav".into(),
		},
	);
}

#[test]
fn svg_injection_end_to_end() {
	let registry = PropertyRegistry::new();
	registry.inject(svg::rule_set()).unwrap();

	let mut element = RecordingElement::default();
	apply_property(&mut element, &registry, "xlinkHref", &Value::from("#icon"));
	assert_eq!(
		element.log,
		vec![Mutation::AttributeNs(
			svg::XLINK_NAMESPACE.into(),
			"href".into(),
			"#icon".into(),
		)],
	);
}

#[test]
fn custom_attributes_apply_without_registration() {
	let registry = PropertyRegistry::new();
	let mut element = RecordingElement::default();
	apply_property(&mut element, &registry, "data-foo", &Value::from("1"));
	apply_property(&mut element, &registry, "aria-label", &Value::from("Close"));
	assert_eq!(
		element.log,
		vec![
			Mutation::Attribute("data-foo".into(), "1".into()),
			Mutation::Attribute("aria-label".into(), "Close".into()),
		],
	);
}

#[test]
fn descriptor_flow_through_both_registries() {
	let tags = TagRegistry::new();
	let properties = PropertyRegistry::new();

	let factory = tags.get("textarea").expect("textarea is built in");
	assert!(!factory.omit_closing_tag());

	let mut props = Props::default();
	props.insert("rows".into(), Value::Int(4));
	props.insert("readOnly".into(), Value::Bool(true));
	let descriptor = factory.create(props);

	let mut element = RecordingElement::default();
	for (name, value) in &descriptor.props {
		apply_property(&mut element, &properties, name, value);
	}

	assert!(element.log.contains(&Mutation::Attribute("rows".into(), "4".into())));
	assert!(
		element
			.log
			.contains(&Mutation::Property("readOnly".into(), Value::Bool(true)))
	);
}

#[test]
fn tag_injection_does_not_break_prior_factories() {
	let tags = TagRegistry::new();
	let div_before = tags.get("div").unwrap();

	tags.inject([("dialog", TagFactory::new("dialog", false))]);

	// Previously resolved bindings keep working; the live table gained the
	// new tag without disturbing the old ones.
	assert_eq!(div_before.create(Props::default()).tag.as_ref(), "div");
	assert_eq!(tags.get("div").unwrap(), div_before);
	assert!(tags.contains("dialog"));
}

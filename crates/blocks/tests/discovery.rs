use blockreg_blocks::{
	BlockFlags, DiscoveryConfig, InitialHeight, RegistryEntry, RegistrySource, block_type, discover,
	find, is_toggled_off,
};
use pretty_assertions::assert_eq;

block_type!(group_finder, {
	description: "Searchable list of groups",
	priority: 20,
	initial_height: 400,
});

block_type!(note_list, {
	description: "Notes attached to the current person",
	initial_height: 0,
});

block_type!(calendar_lava, {
	description: "Calendar rendered from a template",
	initial_height: -1000,
});

block_type!(legacy_banner, {
	description: "Old welcome banner",
	aliases: ["welcome_banner"],
	toggle_off: true,
});

#[test]
fn marker_presence_is_reported() {
	assert_eq!(is_toggled_off("legacy_banner"), Some(true));
	assert_eq!(is_toggled_off("welcome_banner"), Some(true));
	assert_eq!(is_toggled_off("group_finder"), Some(false));
	assert!(find("legacy_banner").unwrap().has_flag(BlockFlags::TOGGLE_OFF));
}

#[test]
fn declared_heights_follow_the_clamp() {
	assert_eq!(find("note_list").unwrap().initial_height(), InitialHeight::Pixels(0));
	assert_eq!(find("group_finder").unwrap().initial_height().pixels(), Some(400));
	assert_eq!(find("calendar_lava").unwrap().initial_height().pixels(), None);
}

#[test]
fn declarations_record_their_crate() {
	let def = find("group_finder").unwrap();
	assert_eq!(def.id(), "blockreg-blocks::group_finder");
	assert_eq!(def.source(), RegistrySource::Crate("blockreg-blocks"));
}

#[test]
fn startup_discovery_skips_toggled_off_types() {
	let catalog = discover(&DiscoveryConfig::default());
	let names: Vec<_> = catalog.iter().map(|d| d.name()).collect();

	assert_eq!(names, vec!["group_finder", "calendar_lava", "note_list"]);
	assert!(!catalog.is_registered("legacy_banner"));
	assert!(!catalog.is_registered("welcome_banner"));
	assert_eq!(catalog.skipped().len(), 1);
	assert!(find("legacy_banner").is_some());
}

#[test]
fn config_can_bring_a_block_back() {
	let config = DiscoveryConfig::from_toml_str(
		r#"
		[blocks.legacy_banner]
		toggle_off = false
		initial_height = 120

		[blocks.group_finder]
		toggle_off = true
		"#,
	)
	.unwrap();
	let catalog = discover(&config);

	assert!(catalog.is_registered("welcome_banner"));
	assert!(!catalog.is_registered("group_finder"));
	assert_eq!(catalog.initial_height("legacy_banner"), Some(InitialHeight::Pixels(120)));
	assert_eq!(
		catalog.initial_height("legacy_banner").and_then(InitialHeight::placeholder_style).as_deref(),
		Some("height: 120px")
	);
}

#[test]
fn alias_keys_override_the_declaration() {
	let config = DiscoveryConfig::from_toml_str(
		r#"
		[blocks.welcome_banner]
		toggle_off = false

		[blocks.retired_widget]
		toggle_off = false
		"#,
	)
	.unwrap();
	let catalog = discover(&config);

	assert!(catalog.is_registered("legacy_banner"));
	assert!(catalog.skipped().is_empty());
	assert_eq!(catalog.unmatched_overrides(), ["retired_widget".to_string()]);
}

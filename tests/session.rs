use entity_detection::{ManualClock, SearchError, SearchResult, SearchSession, SearchType};
use std::sync::Arc;

#[test]
fn searched_labels_cover_every_category() {
    let session = SearchSession::new(SearchType::Custom, Arc::new(ManualClock::new(7)))
        .with_entity("ZOMBIE")
        .with_entity("ARMOR_STAND")
        .with_material("HOPPER")
        .with_block_state("Hopper")
        .with_entity("ZOMBIE");
    assert_eq!(session.entities().len(), 2);
    assert_eq!(session.materials().len(), 1);
    assert_eq!(session.block_states().len(), 1);
    let labels: Vec<_> = session.searched_labels().into_iter().collect();
    assert_eq!(labels, vec!["ARMOR_STAND", "HOPPER", "Hopper", "ZOMBIE"]);

    let result: SearchResult = session.start_result();
    assert_eq!(result.search_type(), SearchType::Custom);
    assert_eq!(result.start_time(), 7);
    assert!(result.searched().contains("Hopper"));
    assert_eq!(result.searched().len(), 4);
}

#[test]
fn search_type_parses_case_insensitively() {
    assert_eq!("MONSTER".parse::<SearchType>().unwrap(), SearchType::Monster);
    assert_eq!(" passive ".parse::<SearchType>().unwrap(), SearchType::Passive);
    assert_eq!("Block".parse::<SearchType>().unwrap(), SearchType::Block);
    assert_eq!(SearchType::Custom.to_string(), "custom");
    for t in [SearchType::Misc, SearchType::Entity] {
        assert_eq!(t.to_string().parse::<SearchType>().unwrap(), t);
    }
}

#[test]
fn unknown_search_type_is_rejected() {
    let err = "villager".parse::<SearchType>().unwrap_err();
    assert!(matches!(err, SearchError::UnknownSearchType(ref s) if s == "villager"));
    assert_eq!(err.to_string(), "unknown search type: villager");
}

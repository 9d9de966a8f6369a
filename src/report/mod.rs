//! Assembles a full [`CompletionReport`] from the individual section
//! evaluators.

use crate::checkup::{collections, community, crops, grandpa, milestones, monsters, summary};
use crate::save::SaveDocument;
use crate::settings::CheckupSettings;
use crate::shared::*;

/// Builds one section. Every evaluator is pure and infallible.
pub fn build_section(id: SectionId, doc: &SaveDocument) -> Section {
    match id {
        SectionId::Summary => summary::section(doc),
        SectionId::Money => milestones::money(doc),
        SectionId::Skills => milestones::skills(doc),
        SectionId::Quests => milestones::quests(doc),
        SectionId::Monsters => monsters::section(doc),
        SectionId::Stardrops => milestones::stardrops(doc),
        SectionId::Family => milestones::family(doc),
        SectionId::Social => milestones::social(doc),
        SectionId::Cooking => collections::cooking(doc),
        SectionId::Crafting => collections::crafting(doc),
        SectionId::Fishing => collections::fishing(doc),
        SectionId::BasicShipping => collections::basic_shipping(doc),
        SectionId::CropShipping => crops::section(doc),
        SectionId::Museum => collections::museum(doc),
        SectionId::CommunityCenter => community::section(doc),
        SectionId::GrandpaEvaluation => grandpa::section(doc),
    }
}

/// Builds the configured sections in the configured order.
pub fn assemble(doc: &SaveDocument, settings: &CheckupSettings) -> CompletionReport {
    let sections = settings
        .ordered_sections()
        .into_iter()
        .map(|id| {
            let mut section = build_section(id, doc);
            if !settings.list_outstanding {
                section.outstanding.clear();
            }
            section
        })
        .collect();
    CompletionReport { sections }
}

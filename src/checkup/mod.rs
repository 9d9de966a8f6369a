//! Checkup domain: turns a loaded save into a completion report.
//!
//! The evaluators in the submodules are pure functions of a [`SaveDocument`].
//! The plugin wraps them in two systems: one rebuilds the report on
//! [`EvaluateSaveEvent`], the other requests a rebuild after every successful
//! load.
//!
//! [`SaveDocument`]: crate::save::SaveDocument

use bevy::prelude::*;
use crate::report;
use crate::settings::CheckupSettings;
use crate::shared::*;

pub mod aggregation;
pub mod collections;
pub mod community;
pub mod completion;
pub mod crops;
pub mod grandpa;
pub mod milestones;
pub mod monsters;
pub mod summary;

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct CheckupPlugin;

impl Plugin for CheckupPlugin {
    fn build(&self, app: &mut App) {
        // ── Resources ──────────────────────────────────────────────────────
        app.init_resource::<CheckupSettings>()
            .init_resource::<LoadedSave>()
            .init_resource::<LatestReport>();

        // ── Events ─────────────────────────────────────────────────────────
        app.add_event::<SaveLoadedEvent>()
            .add_event::<EvaluateSaveEvent>()
            .add_event::<ReportReadyEvent>();

        // ── Systems ────────────────────────────────────────────────────────
        app.add_systems(
            Update,
            (
                // A successful load queues an evaluation for run_checkup.
                evaluate_on_load,
                run_checkup,
            )
                .chain(),
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

/// Requests a report for every successfully loaded save.
pub fn evaluate_on_load(
    mut loaded_events: EventReader<SaveLoadedEvent>,
    mut evaluate_events: EventWriter<EvaluateSaveEvent>,
) {
    for ev in loaded_events.read() {
        if ev.success {
            evaluate_events.send(EvaluateSaveEvent);
        }
    }
}

/// Rebuilds [`LatestReport`] from the loaded save. Several requests in one
/// frame produce a single report.
pub fn run_checkup(
    mut requests: EventReader<EvaluateSaveEvent>,
    loaded: Res<LoadedSave>,
    settings: Res<CheckupSettings>,
    mut latest: ResMut<LatestReport>,
    mut ready_events: EventWriter<ReportReadyEvent>,
) {
    if requests.read().count() == 0 {
        return;
    }

    let Some(doc) = loaded.document.as_ref() else {
        warn!("[Checkup] Evaluation requested but no save is loaded.");
        return;
    };

    let built = report::assemble(doc, &settings);
    let evaluation = grandpa::evaluate(doc);
    let warnings = built.warnings();
    for warning in &warnings {
        warn!("[Checkup] {}", warning);
    }

    info!(
        "[Checkup] Report for {} ready: {} section(s), grandpa {} / {} point(s), {} candle(s).",
        doc.player.name,
        built.sections.len(),
        evaluation.points,
        grandpa::MAX_POINTS,
        evaluation.candles
    );

    ready_events.send(ReportReadyEvent {
        sections: built.sections.len(),
        grandpa_points: evaluation.points,
        candles: evaluation.candles,
        warnings,
    });
    latest.report = Some(built);
}

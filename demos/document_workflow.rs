//! Document Approval Workflow
//!
//! This example walks a document through review and publication.
//!
//! Key concepts:
//! - Guards enforce business rules (word count limits)
//! - Review picks its outcome with a ONE_OF destination
//! - A failing publish falls back to an error state
//! - Observers receive every committed outcome (audit logging)
//!
//! Run with: cargo run --example document_workflow

use tagged_fsm::builder::TransitionBuilder;
use tagged_fsm::engine::Registry;
use tagged_fsm::notify::{OutcomeLog, TransitionOutcome};
use tagged_fsm::storage::{FieldOptions, FieldStore, StateField};
use tagged_fsm::{one_of, state_enum, State};
use thiserror::Error;

state_enum! {
    enum DocState {
        Draft,
        Review,
        Approved,
        Rejected,
        Published,
        Failed,
    }
}

struct Document {
    id: u64,
    content: String,
    word_count: usize,
    state: StateField<DocState>,
}

#[derive(Debug, Error)]
#[error("publishing service unavailable for document {0}")]
struct PublishError(u64);

// Pure guards - validation logic
fn can_submit_for_review(doc: &Document) -> bool {
    !doc.content.is_empty() && doc.word_count >= 100
}

fn within_length(doc: &Document) -> bool {
    doc.word_count <= 5000
}

fn audit(outcome: &TransitionOutcome<'_, Document, DocState>) {
    let to = outcome
        .destination
        .as_ref()
        .map_or("(unchanged)", |state| state.name());
    match outcome.error {
        Some(error) => println!(
            "  [Audit] Document {} {} args={}: {} -> {} after error: {}",
            outcome.object.id,
            outcome.behavior,
            outcome.args,
            outcome.source.name(),
            to,
            error
        ),
        None => println!(
            "  [Audit] Document {} {} args={}: {} -> {}",
            outcome.object.id,
            outcome.behavior,
            outcome.args,
            outcome.source.name(),
            to
        ),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Document Approval Workflow ===\n");

    let submit = TransitionBuilder::new("submit")
        .source(DocState::Draft)
        .destination(DocState::Review)
        .when(can_submit_for_review)
        .build(|_: &mut Document, _: ()| Ok::<_, PublishError>(()))?;

    let review = TransitionBuilder::new("review")
        .source(DocState::Review)
        .destination(one_of![DocState::Approved, DocState::Rejected]?)
        .build_selecting(|doc: &mut Document, _: ()| {
            Ok::<_, PublishError>(if within_length(doc) {
                DocState::Approved
            } else {
                DocState::Rejected
            })
        })?;

    let publish = TransitionBuilder::new("publish")
        .source(DocState::Approved)
        .destination(DocState::Published)
        .on_error(DocState::Failed)
        .build(|doc: &mut Document, online: bool| {
            if online {
                Ok(())
            } else {
                Err(PublishError(doc.id))
            }
        })?;

    let retry = TransitionBuilder::new("retry")
        .source(DocState::Failed)
        .destination(DocState::Approved)
        .build(|_: &mut Document, _: ()| Ok::<_, PublishError>(()))?;

    let log = OutcomeLog::new();
    let mut registry = Registry::new();
    registry
        .store(FieldStore::new(
            "state",
            |d: &Document| &d.state,
            |d: &mut Document| &mut d.state,
        ))
        .register(submit.tag())
        .register(review.tag())
        .register(publish.tag())
        .register(retry.tag());
    registry.signal().connect(audit);
    registry.signal().connect(log.clone());
    let bound = registry.bind()?;
    println!("Bound {bound} transitions to the document state field\n");

    let mut doc = Document {
        id: 123,
        content: "Lorem ipsum dolor sit amet...".to_string(),
        word_count: 250,
        state: StateField::with_state(DocState::Draft, FieldOptions::default()),
    };

    println!("Processing document {}:", doc.id);
    println!("  Word count: {}", doc.word_count);
    println!("  Available: {:?}\n", registry.available_transitions(&doc));

    println!("Step 1: Submit for Review");
    submit.call(&mut doc, ())?;

    println!("Step 2: Review");
    let verdict = review.call(&mut doc, ())?;
    println!("  Verdict: {}", verdict.name());

    println!("Step 3: Publish while the service is down");
    if let Err(error) = publish.call(&mut doc, false) {
        println!("  Publish failed: {error}");
    }

    println!("Step 4: Retry and publish");
    retry.call(&mut doc, ())?;
    publish.call(&mut doc, true)?;

    println!("\nDirect writes to the state field are refused:");
    if let Err(error) = doc.state.set(DocState::Draft) {
        println!("  {error}");
    }

    let path = log.path();
    let names: Vec<&str> = path.iter().map(|state| state.name()).collect();
    println!("\nPath: {}", names.join(" -> "));
    println!("Outcomes as JSON: {}", log.to_json()?);

    println!("\n=== Example Complete ===");
    Ok(())
}

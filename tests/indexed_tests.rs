#![cfg(feature = "reified")]
//! Scenario tests for boxed indexed optics.
//!
//! Every combinator on indexed getters and folds must leave the index
//! produced by the wrapped optic untouched.

use reified_optics::optics::{
    Fold, FunctionIndexedLens, Getter, IndexedFold, IndexedGetter, IndexedLens, IndexedSetter,
    IndexedTraversal, VecIndexedTraversal,
};
use reified_optics::reified::{
    ReifiedGetter, ReifiedIndexedFold, ReifiedIndexedGetter, ReifiedIndexedLens, ReifiedIndexedSetter,
    ReifiedIndexedTraversal,
};
use rstest::rstest;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
struct Scoreboard {
    leader: String,
    scores: Vec<u32>,
}

fn scoreboard() -> Scoreboard {
    Scoreboard {
        leader: "ada".to_string(),
        scores: vec![7, 3, 9],
    }
}

fn best_score() -> ReifiedIndexedGetter<usize, Scoreboard, u32> {
    ReifiedIndexedGetter::from_fn(|board: &Scoreboard| {
        board
            .scores
            .iter()
            .copied()
            .enumerate()
            .max_by_key(|(_, score)| *score)
            .unwrap_or((0, 0))
    })
}

fn scores() -> ReifiedIndexedFold<usize, Scoreboard, u32> {
    ReifiedIndexedFold::from_indexed_traversal(VecIndexedTraversal::<u32>::new())
        .lmap(|board: &Scoreboard| board.scores.clone())
}

// =============================================================================
// Mapping Keeps The Index
// =============================================================================

#[rstest]
#[case(|score: u32| score * 2)]
#[case(|score: u32| score + 100)]
#[case(|_: u32| 0)]
fn fmap_applies_function_and_keeps_index(#[case] function: fn(u32) -> u32) {
    let (index, value) = best_score().iview(&scoreboard());
    let mapped = best_score().fmap(function);

    assert_eq!(mapped.iview(&scoreboard()), (index, function(value)));
}

#[rstest]
fn imap_sees_the_index() {
    let labelled = best_score().imap(|index, score| format!("#{index}: {score}"));

    assert_eq!(labelled.iview(&scoreboard()), (2, "#2: 9".to_string()));
}

#[rstest]
fn fold_fmap_keeps_every_index() {
    let halved = scores().fmap(|score| score / 2);

    assert_eq!(halved.ito_vec(&scoreboard()), vec![(0, 3), (1, 1), (2, 4)]);
    assert_eq!(halved.indices(&scoreboard()), scores().indices(&scoreboard()));
}

#[rstest]
fn dimap_keeps_index() {
    let adapted = best_score().dimap(
        |scores: &Vec<u32>| Scoreboard {
            leader: String::new(),
            scores: scores.clone(),
        },
        |score| score == 9,
    );

    assert_eq!(adapted.iview(&vec![9, 1]), (0, true));
}

// =============================================================================
// Pairing
// =============================================================================

#[rstest]
fn first_pairs_value_with_untouched_component() {
    let tagged = best_score().first::<&str>();

    assert_eq!(tagged.iview(&(scoreboard(), "round 1")), (2, (9, "round 1")));
}

#[rstest]
fn fold_second_pairs_every_value() {
    let tagged = scores().second::<char>();

    assert_eq!(
        tagged.ito_vec(&('x', scoreboard())),
        vec![(0, ('x', 7)), (1, ('x', 3)), (2, ('x', 9))]
    );
}

// =============================================================================
// Interop With Plain Boxes
// =============================================================================

#[rstest]
fn with_index_exposes_pairs_to_plain_algebra() {
    let top_two = scores()
        .with_index()
        .filter(|(_, score)| *score > 5)
        .fmap(|(index, score)| index * 10 + score as usize);

    assert_eq!(top_two.to_vec(&scoreboard()), vec![7, 29]);
}

#[rstest]
fn with_index_getter_combines_with_plain_getters() {
    let leader_name = ReifiedGetter::from_fn(|board: &Scoreboard| board.leader.clone());
    let leader = best_score()
        .with_index()
        .map2(leader_name, |(index, _), leader| format!("{leader}@{index}"));

    assert_eq!(leader.view(&scoreboard()), "ada@2");
}

// =============================================================================
// Write-capable Indexed Boxes
// =============================================================================

#[rstest]
fn indexed_lens_box_delegates() {
    let second = ReifiedIndexedLens::new(FunctionIndexedLens::new(
        |pair: &(i32, i32)| (1_usize, &pair.1),
        |pair: (i32, i32), value: i32| (pair.0, value),
    ));

    assert_eq!(second.iget(&(3, 4)), (1, &4));
    assert_eq!(second.iset((3, 4), 8), (3, 8));
}

#[rstest]
fn indexed_traversal_box_reads_and_writes() {
    let positions = ReifiedIndexedTraversal::new(VecIndexedTraversal::<i32>::new());

    assert_eq!(positions.iget_all(&vec![5, 6]), vec![(0, &5), (1, &6)]);
    assert_eq!(
        positions.iover(vec![5, 6], &mut |index, value| value * (*index as i32 + 1)),
        vec![5, 12]
    );
}

#[rstest]
fn indexed_setter_box_sees_indices() {
    let setter = ReifiedIndexedSetter::new(VecIndexedTraversal::<String>::new());
    let numbered = setter.iover(
        vec!["a".to_string(), "b".to_string()],
        &mut |index, value| format!("{index}{value}"),
    );

    assert_eq!(numbered, vec!["0a".to_string(), "1b".to_string()]);
}

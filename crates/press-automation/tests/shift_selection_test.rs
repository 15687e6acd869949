// Integration tests for shift-extended selections
//
// shift+left/right move the active end one character per press, so
// multi-character selections are built by re-running the same automation
// instance: each run replays its combination list against the element
// state the previous run left behind. The vertical and line-boundary
// variants pin the anchor and derive directionality from where the active
// end lands, including the flip when it crosses the anchor.

mod common;

use press_automation::{
    InMemoryTarget, PressAutomation, PressOptions, PressTarget, SelectionDirection,
    SelectionState, VerticalCaretPolicy, parse_key_sequence,
};

fn automation(keys: &str) -> PressAutomation {
    common::init_tracing();
    let sequence = parse_key_sequence(keys).expect("key sequence should parse");
    PressAutomation::new(sequence, PressOptions::default())
}

async fn press(keys: &str, target: &mut InMemoryTarget) {
    automation(keys)
        .run(target)
        .await
        .expect("press run should complete");
}

async fn press_times(keys: &str, target: &mut InMemoryTarget, times: usize) {
    let press = automation(keys);
    for _ in 0..times {
        press.run(target).await.expect("press run should complete");
    }
}

fn assert_state(target: &InMemoryTarget, value: &str, start: usize, end: usize, inverse: bool) {
    assert_eq!(target.value().unwrap(), value);
    assert_eq!(
        target.selection().unwrap(),
        SelectionState { start, end, inverse }
    );
}

// ============================================================================
// shift+left
// ============================================================================

#[tokio::test]
async fn test_shift_left_from_caret_builds_backward_selection() {
    let mut textarea = InMemoryTarget::multi_line("text\rarea").with_caret(6);
    press_times("shift+left", &mut textarea, 4).await;
    assert_state(&textarea, "text\narea", 2, 6, true);
}

#[tokio::test]
async fn test_shift_left_shrinks_forward_selection_then_flips() {
    let mut textarea = InMemoryTarget::multi_line("text\rare\rtest")
        .with_selection(7, 10, SelectionDirection::Forward);
    press_times("shift+left", &mut textarea, 4).await;
    assert_state(&textarea, "text\nare\ntest", 6, 7, true);
}

#[tokio::test]
async fn test_shift_left_grows_backward_selection() {
    let mut textarea = InMemoryTarget::multi_line("text\rare\rtest")
        .with_selection(7, 10, SelectionDirection::Backward);
    press_times("shift+left", &mut textarea, 4).await;
    assert_state(&textarea, "text\nare\ntest", 3, 10, true);
}

// ============================================================================
// shift+right
// ============================================================================

#[tokio::test]
async fn test_shift_right_from_caret_builds_forward_selection() {
    let mut textarea = InMemoryTarget::multi_line("text\rarea").with_caret(3);
    press_times("shift+right", &mut textarea, 4).await;
    assert_state(&textarea, "text\narea", 3, 7, false);
}

#[tokio::test]
async fn test_shift_right_grows_forward_selection() {
    let mut textarea = InMemoryTarget::multi_line("text\rarea\rtest")
        .with_selection(3, 7, SelectionDirection::Forward);
    press_times("shift+right", &mut textarea, 4).await;
    assert_state(&textarea, "text\narea\ntest", 3, 11, false);
}

#[tokio::test]
async fn test_shift_right_shrinks_backward_selection() {
    let mut textarea = InMemoryTarget::multi_line("text\rare\rtest")
        .with_selection(2, 12, SelectionDirection::Backward);
    press_times("shift+right", &mut textarea, 4).await;
    assert_state(&textarea, "text\nare\ntest", 6, 12, true);
}

// ============================================================================
// shift+up
// ============================================================================

#[tokio::test]
async fn test_shift_up_in_input_preserving_policy() {
    let mut input = InMemoryTarget::single_line("text").with_caret(2);
    press("shift+up", &mut input).await;
    assert_state(&input, "text", 2, 2, false);
}

#[tokio::test]
async fn test_shift_up_in_input_collapsing_policy() {
    let mut input = InMemoryTarget::single_line("text").with_caret(2);
    let sequence = parse_key_sequence("shift+up").unwrap();
    let options = PressOptions::builder()
        .vertical_caret_policy(VerticalCaretPolicy::CollapseToBoundary)
        .build();
    PressAutomation::new(sequence, options)
        .run(&mut input)
        .await
        .unwrap();
    assert_state(&input, "text", 0, 2, true);
}

#[tokio::test]
async fn test_shift_up_from_caret() {
    let mut textarea = InMemoryTarget::multi_line("text\rarea").with_caret(7);
    press("shift+up", &mut textarea).await;
    assert_state(&textarea, "text\narea", 2, 7, true);
}

#[tokio::test]
async fn test_shift_up_with_forward_selection_flips_at_anchor() {
    let mut textarea = InMemoryTarget::multi_line("aaaa\rbbbb\rcccc")
        .with_selection(8, 12, SelectionDirection::Forward);
    press("shift+up", &mut textarea).await;
    assert_state(&textarea, "aaaa\nbbbb\ncccc", 7, 8, true);
}

#[tokio::test]
async fn test_shift_up_with_backward_selection() {
    let mut textarea = InMemoryTarget::multi_line("aaaa\rbbbb\rcccc")
        .with_selection(8, 12, SelectionDirection::Backward);
    press("shift+up", &mut textarea).await;
    assert_state(&textarea, "aaaa\nbbbb\ncccc", 3, 12, true);
}

// ============================================================================
// shift+down
// ============================================================================

#[tokio::test]
async fn test_shift_down_in_input_preserving_policy() {
    let mut input = InMemoryTarget::single_line("text").with_caret(2);
    press("shift+down", &mut input).await;
    assert_state(&input, "text", 2, 2, false);
}

#[tokio::test]
async fn test_shift_down_in_input_collapsing_policy() {
    let mut input = InMemoryTarget::single_line("text").with_caret(2);
    let sequence = parse_key_sequence("shift+down").unwrap();
    let options = PressOptions::builder()
        .vertical_caret_policy(VerticalCaretPolicy::CollapseToBoundary)
        .build();
    PressAutomation::new(sequence, options)
        .run(&mut input)
        .await
        .unwrap();
    assert_state(&input, "text", 2, 4, false);
}

#[tokio::test]
async fn test_shift_down_from_caret() {
    let mut textarea = InMemoryTarget::multi_line("text\rarea").with_caret(2);
    press("shift+down", &mut textarea).await;
    assert_state(&textarea, "text\narea", 2, 7, false);
}

#[tokio::test]
async fn test_shift_down_with_forward_selection() {
    let mut textarea = InMemoryTarget::multi_line("aaaa\rbbbb\rcccc")
        .with_selection(3, 8, SelectionDirection::Forward);
    press("shift+down", &mut textarea).await;
    assert_state(&textarea, "aaaa\nbbbb\ncccc", 3, 13, false);
}

#[tokio::test]
async fn test_shift_down_with_backward_selection_flips_at_anchor() {
    let mut textarea = InMemoryTarget::multi_line("aaaa\rbbbb\rcccc")
        .with_selection(8, 12, SelectionDirection::Backward);
    press("shift+down", &mut textarea).await;
    assert_state(&textarea, "aaaa\nbbbb\ncccc", 12, 13, false);
}

// ============================================================================
// shift+home
// ============================================================================

#[tokio::test]
async fn test_shift_home_in_input() {
    let mut input = InMemoryTarget::single_line("text").with_caret(2);
    press("shift+home", &mut input).await;
    assert_state(&input, "text", 0, 2, true);
}

#[tokio::test]
async fn test_shift_home_from_caret() {
    let mut textarea = InMemoryTarget::multi_line("text\rarea").with_caret(7);
    press("shift+home", &mut textarea).await;
    assert_state(&textarea, "text\narea", 5, 7, true);
}

#[tokio::test]
async fn test_shift_home_with_forward_selection() {
    let mut textarea = InMemoryTarget::multi_line("text\rarea")
        .with_selection(7, 8, SelectionDirection::Forward);
    press("shift+home", &mut textarea).await;
    assert_state(&textarea, "text\narea", 5, 7, true);
}

#[tokio::test]
async fn test_shift_home_with_backward_selection() {
    let mut textarea = InMemoryTarget::multi_line("text\rarea")
        .with_selection(7, 8, SelectionDirection::Backward);
    press("shift+home", &mut textarea).await;
    assert_state(&textarea, "text\narea", 5, 8, true);
}

// Regression: the anchor stays pinned when the selection spans a line break.
#[tokio::test]
async fn test_shift_home_with_forward_multiline_selection() {
    let mut textarea = InMemoryTarget::multi_line("text\rarea")
        .with_selection(2, 7, SelectionDirection::Forward);
    press("shift+home", &mut textarea).await;
    assert_state(&textarea, "text\narea", 2, 5, false);
}

#[tokio::test]
async fn test_shift_home_with_backward_multiline_selection() {
    let mut textarea = InMemoryTarget::multi_line("text\rarea")
        .with_selection(2, 7, SelectionDirection::Backward);
    press("shift+home", &mut textarea).await;
    assert_state(&textarea, "text\narea", 0, 7, true);
}

// ============================================================================
// shift+end
// ============================================================================

#[tokio::test]
async fn test_shift_end_in_input() {
    let mut input = InMemoryTarget::single_line("text").with_caret(2);
    press("shift+end", &mut input).await;
    assert_state(&input, "text", 2, 4, false);
}

#[tokio::test]
async fn test_shift_end_from_caret() {
    let mut textarea = InMemoryTarget::multi_line("text\rarea").with_caret(7);
    press("shift+end", &mut textarea).await;
    assert_state(&textarea, "text\narea", 7, 9, false);
}

#[tokio::test]
async fn test_shift_end_with_forward_selection() {
    let mut textarea = InMemoryTarget::multi_line("text\rarea")
        .with_selection(7, 8, SelectionDirection::Forward);
    press("shift+end", &mut textarea).await;
    assert_state(&textarea, "text\narea", 7, 9, false);
}

#[tokio::test]
async fn test_shift_end_with_backward_selection_flips_at_anchor() {
    let mut textarea = InMemoryTarget::multi_line("text\rarea")
        .with_selection(7, 8, SelectionDirection::Backward);
    press("shift+end", &mut textarea).await;
    assert_state(&textarea, "text\narea", 8, 9, false);
}

#[tokio::test]
async fn test_shift_end_with_forward_multiline_selection() {
    let mut textarea = InMemoryTarget::multi_line("text\rarea")
        .with_selection(2, 8, SelectionDirection::Forward);
    press("shift+end", &mut textarea).await;
    assert_state(&textarea, "text\narea", 2, 9, false);
}

#[tokio::test]
async fn test_shift_end_with_backward_multiline_selection() {
    let mut textarea = InMemoryTarget::multi_line("text\rarea")
        .with_selection(2, 8, SelectionDirection::Backward);
    press("shift+end", &mut textarea).await;
    assert_state(&textarea, "text\narea", 4, 8, true);
}

// Press automation runner
//
// The asynchronous driver: consumes a parsed combination sequence and, one
// combination at a time, dispatches the synthetic key events, resolves the
// embedded shortcuts, computes the resulting value/selection, and commits
// it to the live element. One cooperative suspension point sits between
// combinations so the surrounding event loop can observe side effects.

use crate::error::Result;
use crate::key_sequence::{KeyCombination, KeySequence};
use crate::navigation::{self, EditState, VerticalCaretPolicy};
use crate::shortcuts::{self, PressAction};
use crate::target::PressTarget;

/// Press options
///
/// Configuration options for a press automation run.
///
/// Use the builder pattern to construct options:
///
/// # Example
///
/// ```ignore
/// use press_automation::{PressOptions, VerticalCaretPolicy};
///
/// let options = PressOptions::builder()
///     .vertical_caret_policy(VerticalCaretPolicy::CollapseToBoundary)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct PressOptions {
    /// Behavior of `up`/`down` (and their shift variants) in single-line
    /// elements; host-engine dependent.
    pub vertical_caret_policy: VerticalCaretPolicy,
}

impl PressOptions {
    /// Create a new builder for PressOptions
    pub fn builder() -> PressOptionsBuilder {
        PressOptionsBuilder::default()
    }
}

/// Builder for PressOptions
#[derive(Debug, Clone, Default)]
pub struct PressOptionsBuilder {
    vertical_caret_policy: Option<VerticalCaretPolicy>,
}

impl PressOptionsBuilder {
    /// Set the single-line `up`/`down` caret policy
    pub fn vertical_caret_policy(mut self, policy: VerticalCaretPolicy) -> Self {
        self.vertical_caret_policy = Some(policy);
        self
    }

    /// Build the PressOptions
    pub fn build(self) -> PressOptions {
        PressOptions {
            vertical_caret_policy: self.vertical_caret_policy.unwrap_or_default(),
        }
    }
}

/// Runs a fixed list of key combinations against a target element.
///
/// Holds no element state of its own: `run()` reads the element's value and
/// selection as they are at that moment, so invoking it again replays the
/// same combination list against the updated element. This is how
/// multi-character shift-selections are built up one character per run.
/// Runs against one element must be serialized by the caller.
pub struct PressAutomation {
    combinations: Vec<KeyCombination>,
    options: PressOptions,
}

impl PressAutomation {
    /// Creates a runner for the given parsed sequence.
    pub fn new(sequence: KeySequence, options: PressOptions) -> Self {
        Self {
            combinations: sequence.into_combinations(),
            options,
        }
    }

    /// The combination list this runner replays.
    pub fn combinations(&self) -> &[KeyCombination] {
        &self.combinations
    }

    /// Applies every combination, in order, against the target.
    ///
    /// Per combination: key-down per token (in token order), then, unless a
    /// handler suppressed the default action, the combination's shortcut
    /// and character effects against the element's current state, then
    /// key-up per token, then a cooperative yield. Suppression skips the
    /// effects of that combination only; the run always completes. Adapter
    /// failures abort the run, tagged with the combination being pressed.
    pub async fn run(&self, target: &mut dyn PressTarget) -> Result<()> {
        for (index, combination) in self.combinations.iter().enumerate() {
            self.press_combination(index, combination, target)
                .map_err(|e| e.context(format!("pressing '{combination}'")))?;

            // Let the surrounding event loop observe this combination's
            // side effects before the next one starts.
            tokio::task::yield_now().await;
        }

        Ok(())
    }

    fn press_combination(
        &self,
        index: usize,
        combination: &KeyCombination,
        target: &mut dyn PressTarget,
    ) -> Result<()> {
        let mut suppressed = false;
        for token in combination.tokens() {
            suppressed |= target.dispatch_key_down(token)?;
        }

        let actions = shortcuts::press_actions(combination);
        tracing::debug!(
            index,
            combination = %combination,
            actions = actions.len(),
            suppressed,
            "pressing combination"
        );

        if !suppressed {
            for action in actions {
                self.apply_action(action, target)?;
            }
        }

        for token in combination.tokens() {
            target.dispatch_key_up(token)?;
        }

        Ok(())
    }

    fn apply_action(&self, action: PressAction, target: &mut dyn PressTarget) -> Result<()> {
        let state = EditState::new(&target.value()?, target.selection()?);

        let next = match action {
            PressAction::Shortcut(shortcut) => navigation::apply_shortcut(
                shortcut,
                &state,
                target.kind(),
                self.options.vertical_caret_policy,
            ),
            PressAction::Type(ch) => {
                let mut buf = [0u8; 4];
                let text = ch.encode_utf8(&mut buf);
                if target.dispatch_input(text)? {
                    return Ok(());
                }
                navigation::insert_text(&state, text)
            }
        };

        self.commit(&state, next, target)
    }

    /// Commits a computed state to the element. The value goes through the
    /// host's native value-setting entry point, which may normalize it
    /// (numeric fields coerce intermediate values), so the committed value
    /// is read back and the selection clamped to it rather than trusting
    /// the naive splice result.
    fn commit(
        &self,
        prev: &EditState,
        next: EditState,
        target: &mut dyn PressTarget,
    ) -> Result<()> {
        if next.value != prev.value {
            target.set_value(&next.value)?;
        }

        let committed = navigation::normalize_line_breaks(&target.value()?).into_owned();
        let selection = next.selection.clamp_to(committed.chars().count());
        target.set_selection(selection)?;

        tracing::trace!(value = %committed, ?selection, "committed press effect");
        Ok(())
    }
}

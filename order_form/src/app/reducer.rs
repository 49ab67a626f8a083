use super::event::*;
use super::state::*;

/// Apply one user action. Returns true when the form needs a repaint.
pub fn reduce(state: &mut FormState, ev: UiEvent) -> bool {
    // The confirmation modal blocks everything else.
    if state.pending_confirmation.is_some()
        && !matches!(ev, UiEvent::ConfirmationAnswered { .. })
    {
        return false;
    }

    match ev {
        UiEvent::SideChanged { side } => {
            if state.side == side {
                return false;
            }
            state.side = side;
            tracing::debug!(side = side.label(), "order side changed");
            true
        }

        UiEvent::LimitPriceEdited { text } => {
            if state.limit_price.text == text {
                return false;
            }
            state.limit_price.text = text;
            true
        }
        UiEvent::VolumeEdited { text } => {
            if state.volume.text == text {
                return false;
            }
            state.volume.text = text;
            true
        }

        UiEvent::LimitPriceBlurred => {
            let changed = state.limit_price.validate();
            tracing::debug!(
                text = %state.limit_price.text,
                invalid = state.limit_price.error,
                "limit price validated"
            );
            changed
        }
        UiEvent::VolumeBlurred => {
            let changed = state.volume.validate();
            tracing::debug!(
                text = %state.volume.text,
                invalid = state.volume.error,
                "volume validated"
            );
            changed
        }

        UiEvent::SubmitRequested => {
            if !state.form_is_valid() {
                tracing::debug!("submit ignored; form is not valid");
                return false;
            }
            let phrase = state.confirmation_phrase();
            tracing::info!(
                side = state.side.label(),
                limit_price = %state.limit_price.text,
                volume = %state.volume.text,
                total = %state.total_display(),
                "limit order submit requested"
            );
            state.pending_confirmation = Some(phrase);
            true
        }
        UiEvent::ConfirmationAnswered { accepted } => {
            if state.pending_confirmation.take().is_none() {
                return false;
            }
            // No order is placed either way.
            tracing::info!(accepted, side = state.side.label(), "limit order confirmation answered");
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: &mut FormState, events: impl IntoIterator<Item = UiEvent>) {
        for ev in events {
            reduce(state, ev);
        }
    }

    fn type_and_blur(state: &mut FormState, price: &str, volume: &str) {
        apply(
            state,
            [
                UiEvent::LimitPriceEdited {
                    text: price.to_string(),
                },
                UiEvent::LimitPriceBlurred,
                UiEvent::VolumeEdited {
                    text: volume.to_string(),
                },
                UiEvent::VolumeBlurred,
            ],
        );
    }

    #[test]
    fn test_non_numeric_price_sets_error_on_blur() {
        let mut state = FormState::default();
        reduce(
            &mut state,
            UiEvent::LimitPriceEdited {
                text: "abc".to_string(),
            },
        );
        assert!(!state.limit_price.error, "editing alone must not validate");

        assert!(reduce(&mut state, UiEvent::LimitPriceBlurred));
        assert!(state.limit_price.error);
        assert!(!state.volume.error);
        assert!(!state.form_is_valid());
    }

    #[test]
    fn test_non_numeric_volume_disables_submit() {
        let mut state = FormState::default();
        type_and_blur(&mut state, "100", "2x");
        assert!(state.volume.error);
        assert!(!state.form_is_valid());
        assert!(!reduce(&mut state, UiEvent::SubmitRequested));
        assert!(state.pending_confirmation.is_none());
    }

    #[test]
    fn test_error_sticks_until_next_blur() {
        let mut state = FormState::default();
        type_and_blur(&mut state, "abc", "1");
        assert!(state.limit_price.error);

        reduce(
            &mut state,
            UiEvent::LimitPriceEdited {
                text: "100".to_string(),
            },
        );
        assert!(state.limit_price.error);
        assert!(!state.form_is_valid());

        reduce(&mut state, UiEvent::LimitPriceBlurred);
        assert!(!state.limit_price.error);
        assert!(state.form_is_valid());
    }

    #[test]
    fn test_comma_and_dot_numbers_enable_submit() {
        for (price, volume) in [("100", "2"), ("1,5", "0.25"), ("563890.45", "0,001")] {
            let mut state = FormState::default();
            type_and_blur(&mut state, price, volume);
            assert!(state.form_is_valid(), "{price:?} x {volume:?}");
        }
    }

    #[test]
    fn test_total_tracks_edits() {
        let mut state = FormState::default();
        type_and_blur(&mut state, "100", "2");
        assert_eq!(state.total_display(), "200,00\u{a0}NOK");

        reduce(
            &mut state,
            UiEvent::LimitPriceEdited {
                text: String::new(),
            },
        );
        assert_eq!(state.total_display(), "0,00 NOK");
    }

    #[test]
    fn test_submit_asks_for_confirmation_per_side() {
        let mut state = FormState::default();
        type_and_blur(&mut state, "100", "2");

        assert!(reduce(&mut state, UiEvent::SubmitRequested));
        assert_eq!(
            state.pending_confirmation.as_deref(),
            Some("Er du sikker på at du vil plassere en limit-ordre for kjøp?")
        );
        assert!(reduce(
            &mut state,
            UiEvent::ConfirmationAnswered { accepted: true }
        ));
        assert!(state.pending_confirmation.is_none());

        reduce(
            &mut state,
            UiEvent::SideChanged {
                side: OrderSide::Sell,
            },
        );
        reduce(&mut state, UiEvent::SubmitRequested);
        assert_eq!(
            state.pending_confirmation.as_deref(),
            Some("Er du sikker på at du vil plassere en limit-ordre for salg?")
        );
    }

    #[test]
    fn test_answer_leaves_form_untouched() {
        let mut state = FormState::default();
        type_and_blur(&mut state, "100", "2");
        let before = state.clone();

        reduce(&mut state, UiEvent::SubmitRequested);
        reduce(&mut state, UiEvent::ConfirmationAnswered { accepted: false });
        assert_eq!(state, before);

        reduce(&mut state, UiEvent::SubmitRequested);
        reduce(&mut state, UiEvent::ConfirmationAnswered { accepted: true });
        assert_eq!(state, before);
    }

    #[test]
    fn test_modal_blocks_other_events() {
        let mut state = FormState::default();
        type_and_blur(&mut state, "100", "2");
        reduce(&mut state, UiEvent::SubmitRequested);

        assert!(!reduce(
            &mut state,
            UiEvent::VolumeEdited {
                text: "9".to_string()
            }
        ));
        assert!(!reduce(
            &mut state,
            UiEvent::SideChanged {
                side: OrderSide::Sell
            }
        ));
        assert_eq!(state.volume.text, "2");
        assert_eq!(state.side, OrderSide::Buy);
    }

    #[test]
    fn test_side_toggle_keeps_numbers() {
        let mut state = FormState::default();
        type_and_blur(&mut state, "100", "2");
        let total = state.total_display();

        assert!(reduce(
            &mut state,
            UiEvent::SideChanged {
                side: OrderSide::Sell
            }
        ));
        assert!(!reduce(
            &mut state,
            UiEvent::SideChanged {
                side: OrderSide::Sell
            }
        ));
        assert_eq!(state.total_display(), total);
        assert!(state.form_is_valid());
    }

    #[test]
    fn test_stray_answer_is_ignored() {
        let mut state = FormState::default();
        assert!(!reduce(
            &mut state,
            UiEvent::ConfirmationAnswered { accepted: true }
        ));
    }
}

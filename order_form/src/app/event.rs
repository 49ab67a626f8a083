use super::state::OrderSide;

/// Everything the user can do to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SideChanged { side: OrderSide },

    LimitPriceEdited { text: String },
    VolumeEdited { text: String },
    LimitPriceBlurred,
    VolumeBlurred,

    SubmitRequested,
    ConfirmationAnswered { accepted: bool },
}

//! Project filter buttons over `.project-card` elements.

use std::cell::RefCell;
use std::rc::Rc;

use effects::consts::CARD_HIDE_MS;
use effects::filter::{CardAction, FilterState, parse_categories};
use effects::registry::{Activation, FeatureResult};
use effects::task::Generation;
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::Element;

use super::FeatureContext;
use crate::util::dom;

const CARD_TRANSITION: &str = "opacity 0.3s ease, transform 0.3s ease";

struct Board {
    buttons: Vec<Element>,
    cards: Vec<Element>,
    categories: Vec<Vec<String>>,
    state: RefCell<FilterState>,
}

impl Board {
    fn select(self: &Rc<Self>, button: &Element) {
        let Some(filter) = button.get_attribute("data-filter") else {
            return;
        };
        let Some(actions) = self.state.borrow_mut().apply(&filter, &self.categories) else {
            return;
        };
        for other in &self.buttons {
            dom::set_class(other, "active", other == button);
        }
        for (index, action) in actions.into_iter().enumerate() {
            match action {
                CardAction::Show { delay_ms, ticket } => self.show(index, delay_ms, ticket),
                CardAction::Hide { ticket } => self.hide(index, ticket),
            }
        }
    }

    fn show(self: &Rc<Self>, index: usize, delay_ms: f64, ticket: Generation) {
        let board = Rc::clone(self);
        Timeout::new(millis(delay_ms), move || {
            if !board.state.borrow().is_current(index, ticket) {
                return;
            }
            let Some(card) = board.cards.get(index) else {
                return;
            };
            dom::set_style(card, "transition", "none");
            dom::set_style(card, "display", "block");
            dom::set_style(card, "opacity", "0");
            dom::set_style(card, "transform", "translateY(20px)");
            // Flush layout so the transition starts from the offset position.
            dom::offset_height(card);
            dom::set_style(card, "transition", CARD_TRANSITION);
            dom::set_style(card, "opacity", "1");
            dom::set_style(card, "transform", "translateY(0)");
        })
        .forget();
    }

    fn hide(self: &Rc<Self>, index: usize, ticket: Generation) {
        let Some(card) = self.cards.get(index) else {
            return;
        };
        dom::set_style(card, "opacity", "0");
        dom::set_style(card, "transform", "translateY(-20px)");
        let board = Rc::clone(self);
        Timeout::new(millis(CARD_HIDE_MS), move || {
            if !board.state.borrow().is_current(index, ticket) {
                return;
            }
            if let Some(card) = board.cards.get(index) {
                dom::set_style(card, "display", "none");
            }
        })
        .forget();
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn millis(ms: f64) -> u32 {
    ms.max(0.0).round() as u32
}

pub fn init(ctx: &FeatureContext) -> FeatureResult {
    let buttons = dom::query_all(&ctx.document, ".filter-btn[data-filter]");
    let cards = dom::query_all(&ctx.document, ".project-card");
    if buttons.is_empty() || cards.is_empty() {
        return Ok(Activation::Skipped("no filter buttons or project cards"));
    }

    let categories = cards
        .iter()
        .map(|card| card.get_attribute("data-category").as_deref().map(parse_categories).unwrap_or_default())
        .collect();
    for card in &cards {
        dom::set_style(card, "transition", CARD_TRANSITION);
    }

    let board = Rc::new(Board { buttons, cards, categories, state: RefCell::new(FilterState::default()) });
    for button in &board.buttons {
        let board_cb = Rc::clone(&board);
        let button_cb = button.clone();
        EventListener::new(button, "click", move |_| board_cb.select(&button_cb)).forget();
    }

    Ok(Activation::Active)
}

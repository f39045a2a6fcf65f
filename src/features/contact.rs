//! Contact form: inline validation, loading state, delivery, success notice.

use std::rc::Rc;

use effects::form::{
    Field, FieldKind, LoadingGuard, LoadingIndicator, SUBMIT_ERROR_MESSAGE, SUBMIT_SUCCESS_MESSAGE, SubmitTarget,
    clears_error_on_input, validate_field, validate_form,
};
use effects::registry::{Activation, FeatureError, FeatureResult};
use effects::toast::ToastKind;
use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::FeatureContext;
use crate::error::SubmitError;
use crate::net::api;
use crate::state::toasts::Notifier;
use crate::util::dom;

const FIELD_SELECTOR: &str = ".form__input";

/// Submit button busy state: `loading` class plus `disabled`.
struct SubmitButton(Option<HtmlButtonElement>);

impl LoadingIndicator for SubmitButton {
    fn set_loading(&self, loading: bool) {
        if let Some(button) = &self.0 {
            dom::set_class(button, "loading", loading);
            button.set_disabled(loading);
        }
    }
}

struct ContactForm {
    form: HtmlFormElement,
    document: Document,
    inputs: Vec<Element>,
    success: Option<Element>,
    notifier: Notifier,
    target: SubmitTarget,
    simulated_ms: u32,
    success_ms: u32,
}

impl ContactForm {
    fn field(input: &Element) -> Field {
        let name = input.get_attribute("name").unwrap_or_else(|| input.id());
        let input_type = input.get_attribute("type").unwrap_or_default();
        let required = input.has_attribute("required");
        Field::new(name.clone(), FieldKind::classify(&input_type, &name), required, value_of(input))
    }

    fn show_error(&self, input: &Element, field: &Field, message: Option<String>) {
        dom::set_class(input, "error", message.is_some());
        if let Some(slot) = self.document.get_element_by_id(&field.error_slot_id()) {
            slot.set_text_content(Some(message.as_deref().unwrap_or("")));
        }
    }

    fn on_blur(&self, input: &Element) {
        let field = Self::field(input);
        let message = validate_field(&field).err().map(|e| e.to_string());
        self.show_error(input, &field, message);
    }

    fn on_input(&self, input: &Element) {
        if dom::has_class(input, "error") && clears_error_on_input(&value_of(input)) {
            let field = Self::field(input);
            self.show_error(input, &field, None);
        }
    }

    /// Validate every field, update every slot, and report overall validity.
    fn validate_all(&self) -> bool {
        let fields = self.inputs.iter().map(Self::field).collect::<Vec<_>>();
        let report = validate_form(&fields);
        for (input, field) in self.inputs.iter().zip(&fields) {
            let message = report.error_for(&field.name).map(ToString::to_string);
            self.show_error(input, field, message);
        }
        report.is_valid()
    }

    async fn deliver(&self) -> Result<(), SubmitError> {
        match &self.target {
            SubmitTarget::Remote(endpoint) => api::submit_form(endpoint, &self.form).await,
            SubmitTarget::Simulated => api::simulate_submission(self.simulated_ms).await,
        }
    }

    async fn submit(self: Rc<Self>) {
        let button = self
            .form
            .query_selector(r#"button[type="submit"]"#)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        let outcome = {
            let _loading = LoadingGuard::engage(SubmitButton(button));
            self.deliver().await
        };
        match outcome {
            Ok(()) => {
                log::info!("contact form delivered");
                self.form.reset();
                self.flash_success();
                self.notifier.notify(SUBMIT_SUCCESS_MESSAGE, ToastKind::Success);
            }
            Err(e) => {
                log::warn!("contact form failed: {e}");
                self.notifier.notify(SUBMIT_ERROR_MESSAGE, ToastKind::Error);
            }
        }
    }

    fn flash_success(&self) {
        let Some(notice) = self.success.clone() else {
            return;
        };
        dom::set_class(&notice, "show", true);
        Timeout::new(self.success_ms, move || dom::set_class(&notice, "show", false)).forget();
    }
}

fn value_of(input: &Element) -> String {
    if let Some(el) = input.dyn_ref::<HtmlInputElement>() {
        return el.value();
    }
    if let Some(el) = input.dyn_ref::<HtmlTextAreaElement>() {
        return el.value();
    }
    String::new()
}

pub fn init(ctx: &FeatureContext) -> FeatureResult {
    let Some(form) = dom::query(&ctx.document, "#contact-form") else {
        return Ok(Activation::Skipped("no #contact-form"));
    };
    let form = form
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| FeatureError::Dom("#contact-form is not a form".to_owned()))?;

    let action = form.get_attribute("action");
    let target = SubmitTarget::resolve(ctx.config.form_endpoint.as_deref(), action.as_deref());
    log::debug!("contact form target: {target:?}");

    let contact = Rc::new(ContactForm {
        inputs: dom::query_all_in(&form, FIELD_SELECTOR),
        form,
        document: ctx.document.clone(),
        success: dom::query(&ctx.document, "#form-success"),
        notifier: ctx.notifier,
        target,
        simulated_ms: ctx.config.simulated_submit_ms,
        success_ms: ctx.config.success_notice_ms,
    });

    for input in &contact.inputs {
        let on_blur = Rc::clone(&contact);
        let el = input.clone();
        EventListener::new(input, "blur", move |_| on_blur.on_blur(&el)).forget();

        let on_input = Rc::clone(&contact);
        let el = input.clone();
        EventListener::new(input, "input", move |_| on_input.on_input(&el)).forget();
    }

    let on_submit = Rc::clone(&contact);
    let prevent = EventListenerOptions::enable_prevent_default();
    EventListener::new_with_options(&contact.form, "submit", prevent, move |event| {
        event.prevent_default();
        if !on_submit.validate_all() {
            log::debug!("contact form blocked by validation");
            return;
        }
        wasm_bindgen_futures::spawn_local(Rc::clone(&on_submit).submit());
    })
    .forget();

    Ok(Activation::Active)
}

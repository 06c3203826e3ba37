use log::{error, info};
use web_sys::{HtmlElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::ripple_button::RippleButton;
use crate::dom::{self, Block};
use crate::error::ConfigurationError;
use crate::form::{ContactForm, Field, SubmitOutcome};
use crate::scheduler::{Scheduler, TaskName};

/// Subject pre-fill coming from a product card. `seq` changes on every
/// request so picking the same product twice still re-fills.
#[derive(Clone, Debug, PartialEq)]
pub struct PrefillRequest {
    pub product: AttrValue,
    pub seq: u32,
}

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    #[prop_or_default]
    pub prefill: Option<PrefillRequest>,
}

pub enum Msg {
    Input(Field, String),
    Blur(Field),
    Submit,
    HideSuccess,
}

enum ScrollTarget {
    Success,
    Error(Field),
}

pub struct ContactSection {
    form: ContactForm,
    inputs: [NodeRef; 4],
    errors: [NodeRef; 4],
    success: NodeRef,
    scheduler: Scheduler,
    scroll_after_render: Option<ScrollTarget>,
    focus_after_render: bool,
}

impl ContactSection {
    fn verify_targets(&self) -> Result<(), ConfigurationError> {
        for field in Field::ALL {
            let input = &self.inputs[field.index()];
            match field {
                Field::Message => {
                    dom::require_ref::<HtmlTextAreaElement>(input, field.id(), "textarea")?;
                }
                _ => {
                    dom::require_ref::<HtmlInputElement>(input, field.id(), "input")?;
                }
            }
            dom::require_ref::<HtmlElement>(&self.errors[field.index()], field.error_id(), "span")?;
        }
        dom::require_ref::<HtmlElement>(&self.success, "form-success", "div")?;
        Ok(())
    }

    fn focus_name(&self) -> Result<(), ConfigurationError> {
        dom::require_ref::<HtmlInputElement>(&self.inputs[Field::Name.index()], "name", "input")?
            .focus()
            .map_err(|e| ConfigurationError::browser("focus", e))
    }

    fn scroll_to(&self, target: ScrollTarget) -> Result<(), ConfigurationError> {
        let (node, name) = match target {
            ScrollTarget::Success => (&self.success, "form-success"),
            ScrollTarget::Error(field) => (&self.errors[field.index()], field.error_id()),
        };
        let el = dom::require_ref::<web_sys::Element>(node, name, "element")?;
        dom::scroll_element_into_view(&el, Block::Nearest);
        Ok(())
    }

    fn field_view(&self, ctx: &Context<Self>, field: Field) -> Html {
        let state = self.form.field(field);
        let border = format!("border-color: {};", state.status.border_color());
        let onblur = ctx.link().callback(move |_: FocusEvent| Msg::Blur(field));
        let control = match field {
            Field::Message => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    Msg::Input(field, input.value())
                });
                html! {
                    <textarea
                        id={field.id()}
                        name={field.id()}
                        rows="5"
                        ref={self.inputs[field.index()].clone()}
                        value={state.value.clone()}
                        style={border}
                        {oninput}
                        {onblur}
                    />
                }
            }
            _ => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::Input(field, input.value())
                });
                let kind = if field == Field::Email { "email" } else { "text" };
                html! {
                    <input
                        type={kind}
                        id={field.id()}
                        name={field.id()}
                        ref={self.inputs[field.index()].clone()}
                        value={state.value.clone()}
                        style={border}
                        {oninput}
                        {onblur}
                    />
                }
            }
        };

        html! {
            <div class="form-group">
                <label for={field.id()}>{field.label()}</label>
                {control}
                <span class="error-message" id={field.error_id()} ref={self.errors[field.index()].clone()}>
                    {state.status.error_text()}
                </span>
            </div>
        }
    }
}

impl Component for ContactSection {
    type Message = Msg;
    type Properties = ContactSectionProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ContactForm::default(),
            inputs: Default::default(),
            errors: Default::default(),
            success: NodeRef::default(),
            scheduler: Scheduler::default(),
            scroll_after_render: None,
            focus_after_render: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Input(field, value) => {
                self.form.input(field, value);
                true
            }
            Msg::Blur(field) => {
                self.form.blur(field);
                true
            }
            Msg::Submit => {
                match self.form.submit() {
                    SubmitOutcome::Sent(record) => {
                        // Nothing receives the message; it is only logged.
                        match serde_json::to_string(&record) {
                            Ok(json) => gloo_console::log!("Form submitted:", json),
                            Err(e) => error!("could not serialise submission: {}", e),
                        }
                        info!("contact form submitted by {}", record.name);
                        let link = ctx.link().clone();
                        self.scheduler
                            .schedule(TaskName::HideSuccess, move || link.send_message(Msg::HideSuccess));
                        self.scroll_after_render = Some(ScrollTarget::Success);
                    }
                    SubmitOutcome::Rejected { first_invalid } => {
                        info!("contact form rejected, first invalid field: {}", first_invalid.id());
                        self.scroll_after_render = Some(ScrollTarget::Error(first_invalid));
                    }
                }
                true
            }
            Msg::HideSuccess => {
                self.form.hide_success();
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let prefill = &ctx.props().prefill;
        if prefill == &old_props.prefill {
            return false;
        }
        let Some(request) = prefill else {
            return false;
        };
        self.form.prefill_subject(&request.product);
        // Focus once the new subject is on screen.
        self.focus_after_render = true;
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            if let Err(err) = self.verify_targets() {
                error!("contact form is not wired up: {}", err);
            }
        }
        if let Some(target) = self.scroll_after_render.take() {
            if let Err(err) = self.scroll_to(target) {
                error!("{}", err);
            }
        }
        if std::mem::take(&mut self.focus_after_render) {
            if let Err(err) = self.focus_name() {
                error!("{}", err);
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let success = self.form.success();

        html! {
            <section id="contact" class="section contact">
                <style>
                    {r#"
                    .contact-form {
                        max-width: 640px;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                    }
                    .form-group {
                        display: flex;
                        flex-direction: column;
                        gap: 0.4rem;
                    }
                    .form-group input,
                    .form-group textarea {
                        padding: 0.8rem 1rem;
                        border: 2px solid #e0e0e0;
                        border-radius: 8px;
                        font: inherit;
                        transition: border-color 0.2s ease;
                    }
                    .error-message {
                        color: #e74c3c;
                        font-size: 0.85rem;
                        min-height: 1em;
                    }
                    .form-success {
                        display: none;
                        padding: 1rem;
                        border-radius: 8px;
                        background: #eafaf1;
                        color: #1e8449;
                        text-align: center;
                    }
                    .form-success.show {
                        display: block;
                    }
                    "#}
                </style>
                <h2 class="section-title">{"Get In Touch"}</h2>
                <form id="contact-form" class="contact-form" novalidate=true {onsubmit}>
                    { for Field::ALL.iter().map(|&field| self.field_view(ctx, field)) }
                    <RippleButton kind="submit" class="btn-primary">{"Send Message"}</RippleButton>
                    <div
                        id="form-success"
                        class={classes!("form-success", success.visible.then_some("show"))}
                        ref={self.success.clone()}
                    >
                        {success.text.clone()}
                    </div>
                </form>
            </section>
        }
    }
}

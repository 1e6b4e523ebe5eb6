use std::collections::BTreeMap;
use std::rc::Rc;

use landing_page::contact::{
    validate_field, Field, FormRecord, Submission, SubmissionController, SubmissionState,
    SuccessNotice, TimerDelay,
};
use landing_page::error::{report, PageError};
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::effects::{ripple, window};

pub enum ContactFormMsg {
    Input(Field, String),
    Blur(Field),
    Submit,
    StateChanged(SubmissionState),
    Finished(Submission),
}

pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    errors: BTreeMap<Field, &'static str>,
    controller: Rc<SubmissionController>,
}

impl ContactForm {
    fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    fn record(&self) -> FormRecord {
        FormRecord::new(&self.name, &self.email, &self.message)
    }

    fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.errors.clear();
        info!("🔄 Form reset completed");
    }

    fn field_view(&self, field: Field, label: &str, input: Html) -> Html {
        html! {
            <div class="form-group">
                <label for={field.id()}>{label}</label>
                {input}
                if let Some(error) = self.errors.get(&field) {
                    <div class="error-message">{*error}</div>
                }
            </div>
        }
    }

    fn field_class(&self, field: Field) -> Classes {
        classes!("form-input", self.errors.contains_key(&field).then(|| "has-error"))
    }
}

fn show_notice(notice: &SuccessNotice) -> Result<(), PageError> {
    window()?.alert_with_message(&notice.to_string())?;
    Ok(())
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let controller = Rc::new(SubmissionController::default());
        let link = ctx.link().clone();
        controller.observe(move |state| link.send_message(ContactFormMsg::StateChanged(state)));

        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            errors: BTreeMap::new(),
            controller,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::Input(field, value) => {
                *self.value_mut(field) = value;
                self.errors.remove(&field);
                true
            }
            ContactFormMsg::Blur(field) => {
                // An untouched field is only flagged by a full submit
                let value = self.value(field).trim();
                match (value.is_empty(), validate_field(field, value)) {
                    (false, Some(error)) => {
                        self.errors.insert(field, error);
                    }
                    _ => {
                        self.errors.remove(&field);
                    }
                }
                true
            }
            ContactFormMsg::Submit => {
                info!("📝 Form submission attempted");
                if self.controller.state() != SubmissionState::Idle {
                    return false;
                }
                let record = self.record();
                let controller = self.controller.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = controller.submit(record, &TimerDelay).await;
                    link.send_message(ContactFormMsg::Finished(outcome));
                });
                false
            }
            ContactFormMsg::StateChanged(_) => true,
            ContactFormMsg::Finished(Submission::Rejected(result)) => {
                self.errors = result.into_errors();
                true
            }
            ContactFormMsg::Finished(Submission::Ignored) => false,
            ContactFormMsg::Finished(Submission::Delivered(notice)) => {
                report("show success notice", show_notice(&notice));
                self.reset();
                true
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.controller.clear_observers();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let busy = self.controller.is_busy();

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });
        let on_text_input = |field: Field| {
            link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                ContactFormMsg::Input(field, input.value())
            })
        };
        let on_message_input = link.callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            ContactFormMsg::Input(Field::Message, input.value())
        });
        let on_blur = |field: Field| link.callback(move |_: FocusEvent| ContactFormMsg::Blur(field));

        html! {
            <form id="contactForm" class="contact-form" {onsubmit} novalidate={true}>
                {self.field_view(Field::Name, "Name", html! {
                    <input
                        type="text"
                        id={Field::Name.id()}
                        name={Field::Name.id()}
                        class={self.field_class(Field::Name)}
                        placeholder="Your name"
                        value={self.name.clone()}
                        oninput={on_text_input(Field::Name)}
                        onblur={on_blur(Field::Name)}
                    />
                })}
                {self.field_view(Field::Email, "Email", html! {
                    <input
                        type="email"
                        id={Field::Email.id()}
                        name={Field::Email.id()}
                        class={self.field_class(Field::Email)}
                        placeholder="you@example.com"
                        value={self.email.clone()}
                        oninput={on_text_input(Field::Email)}
                        onblur={on_blur(Field::Email)}
                    />
                })}
                {self.field_view(Field::Message, "Message", html! {
                    <textarea
                        id={Field::Message.id()}
                        name={Field::Message.id()}
                        class={self.field_class(Field::Message)}
                        rows="5"
                        placeholder="How can we help?"
                        value={self.message.clone()}
                        oninput={on_message_input}
                        onblur={on_blur(Field::Message)}
                    />
                })}
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled={busy}
                    style={if busy { "opacity: 0.7;" } else { "opacity: 1;" }}
                    onclick={Callback::from(|e: MouseEvent| {
                        report("button ripple", ripple::spawn_ripple(&e));
                    })}
                >
                    { if busy { "Sending..." } else { "Send Message" } }
                </button>
            </form>
        }
    }
}

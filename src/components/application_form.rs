use gloo_console::log;
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::state::wizard::{ApplicationForm, BadgeLevel, CompanyStage, FundingBucket, WizardStep};

#[derive(Properties, PartialEq)]
pub struct ApplicationModalProps {
    pub on_close: Callback<()>,
}

/// The certification application wizard. All form state lives here, so
/// closing the modal (which unmounts it) discards everything and the next
/// open starts back at step 1.
#[function_component(ApplicationModal)]
pub fn application_modal(props: &ApplicationModalProps) -> Html {
    let step = use_state(|| WizardStep::Company);
    let form = use_state(ApplicationForm::default);

    // The pending close-after-review timer. Held here so that unmounting the
    // modal mid-delay drops the handle and cancels the callback instead of
    // letting it fire against a dead component.
    let pending_close = use_mut_ref(|| None::<Timeout>);

    {
        let pending_close = pending_close.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    pending_close.borrow_mut().take();
                }
            },
            (),
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    let next_step = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.set(step.next()))
    };

    let prev_step = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.set(step.prev()))
    };

    let onsubmit = {
        let step = step.clone();
        let form = form.clone();
        let on_close = props.on_close.clone();
        let pending_close = pending_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *step != WizardStep::Badge {
                return;
            }
            match serde_json::to_string(&*form) {
                Ok(payload) => log!("Submitting application:", payload),
                Err(err) => log!("Failed to serialize application:", err.to_string()),
            }
            step.set(step.submit());

            let on_close = on_close.clone();
            let timeout = Timeout::new(config::SUBMIT_REVIEW_DELAY_MS, move || {
                on_close.emit(());
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(
                        "Application submitted successfully! We'll review your submission within 48 hours.",
                    );
                }
            });
            *pending_close.borrow_mut() = Some(timeout);
        })
    };

    let text_field = |label: &'static str,
                      input_type: &'static str,
                      required: bool,
                      value: String,
                      update: Callback<String>| {
        html! {
            <div class="form-field">
                <label>{label}</label>
                <input
                    type={input_type}
                    required={required}
                    value={value}
                    onchange={Callback::from(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        update.emit(input.value());
                    })}
                />
            </div>
        }
    };

    let set_field = |apply: fn(&mut ApplicationForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut updated = (*form).clone();
            apply(&mut updated, value);
            form.set(updated);
        })
    };

    let step_body = match *step {
        WizardStep::Company => html! {
            <div class="step-fields">
                <h3>{"Company Information"}</h3>
                { text_field("Company Name", "text", true, form.company_name.clone(),
                    set_field(|f, v| f.company_name = v)) }
                { text_field("Founder Name", "text", true, form.founder_name.clone(),
                    set_field(|f, v| f.founder_name = v)) }
                { text_field("Email", "email", true, form.email.clone(),
                    set_field(|f, v| f.email = v)) }
                { text_field("Website", "url", false, form.website.clone(),
                    set_field(|f, v| f.website = v)) }
            </div>
        },
        WizardStep::Business => html! {
            <div class="step-fields">
                <h3>{"Business Details"}</h3>
                <div class="form-field">
                    <label>{"Current Stage"}</label>
                    <select required=true onchange={
                        let form = form.clone();
                        Callback::from(move |e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            let mut updated = (*form).clone();
                            updated.stage = CompanyStage::parse(&select.value());
                            form.set(updated);
                        })
                    }>
                        <option value="" selected={form.stage.is_none()}>{"Select stage"}</option>
                        { for CompanyStage::ALL.iter().map(|&stage| html! {
                            <option value={stage.as_str()} selected={form.stage == Some(stage)}>
                                {stage.label()}
                            </option>
                        }) }
                    </select>
                </div>
                <div class="form-field">
                    <label>{"Funding Raised"}</label>
                    <select onchange={
                        let form = form.clone();
                        Callback::from(move |e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            let mut updated = (*form).clone();
                            updated.funding_raised = FundingBucket::parse(&select.value());
                            form.set(updated);
                        })
                    }>
                        <option value="" selected={form.funding_raised.is_none()}>
                            {"Select funding amount"}
                        </option>
                        { for FundingBucket::ALL.iter().map(|&bucket| html! {
                            <option value={bucket.as_str()} selected={form.funding_raised == Some(bucket)}>
                                {bucket.label()}
                            </option>
                        }) }
                    </select>
                </div>
                <div class="form-field">
                    <label>{"Company Description"}</label>
                    <textarea
                        required=true
                        rows="4"
                        placeholder="Describe your fintech innovation and what makes it unique..."
                        value={form.description.clone()}
                        onchange={
                            let form = form.clone();
                            Callback::from(move |e: Event| {
                                let area: HtmlTextAreaElement = e.target_unchecked_into();
                                let mut updated = (*form).clone();
                                updated.description = area.value();
                                form.set(updated);
                            })
                        }
                    />
                </div>
            </div>
        },
        WizardStep::Badge => html! {
            <div class="step-fields">
                <h3>{"Choose Certification Level"}</h3>
                <div class="badge-choices">
                    { for BadgeLevel::ALL.iter().map(|&badge| {
                        let onchange = {
                            let form = form.clone();
                            Callback::from(move |_: Event| {
                                let mut updated = (*form).clone();
                                updated.badge_level = badge;
                                form.set(updated);
                            })
                        };
                        html! {
                            <label class="badge-choice">
                                <input
                                    type="radio"
                                    name="badge-level"
                                    value={badge.as_str()}
                                    checked={form.badge_level == badge}
                                    {onchange}
                                />
                                <span class="badge-choice-icon">{badge.icon()}</span>
                                <span class="badge-choice-text">
                                    <span class="badge-choice-name">{badge.name()}</span>
                                    <span class="badge-choice-price">{badge.price()}</span>
                                </span>
                            </label>
                        }
                    }) }
                </div>
            </div>
        },
        WizardStep::Submitted => html! {},
    };

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div class="modal-dialog" onclick={stop_propagation}>
                <div class="modal-header">
                    <h2>{"Apply for FinStamp Certification"}</h2>
                    <button class="modal-close" onclick={close}>{"✕"}</button>
                </div>

                {
                    if *step != WizardStep::Submitted {
                        html! {
                            <div class="progress">
                                <div class="progress-labels">
                                    <span>{format!("Step {} of 3", step.number())}</span>
                                    <span>{format!("{}% Complete", step.progress_percent())}</span>
                                </div>
                                <div class="progress-track">
                                    <div
                                        class="progress-fill"
                                        style={format!("width: {}%;", step.progress_percent())}
                                    ></div>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if *step == WizardStep::Submitted {
                        html! {
                            <div class="submitted-panel">
                                <div class="submitted-check">{"✓"}</div>
                                <h3>{"Application Submitted!"}</h3>
                                <p>{"We'll review your submission and get back to you within 48 hours."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <form {onsubmit}>
                                { step_body }
                                <div class="wizard-buttons">
                                    {
                                        if *step != WizardStep::Company {
                                            html! {
                                                <button type="button" class="wizard-back" onclick={prev_step}>
                                                    {"Previous"}
                                                </button>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    {
                                        if *step != WizardStep::Badge {
                                            html! {
                                                <button type="button" class="wizard-next" onclick={next_step}>
                                                    {"Next"}
                                                </button>
                                            }
                                        } else {
                                            html! {
                                                <button type="submit" class="wizard-next">
                                                    {"Submit Application"}
                                                </button>
                                            }
                                        }
                                    }
                                </div>
                            </form>
                        }
                    }
                }
            </div>

            <style>
                {r#"
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 50;
                    padding: 1rem;
                }

                .modal-dialog {
                    background: #fff;
                    border-radius: 16px;
                    padding: 2rem;
                    max-width: 640px;
                    width: 100%;
                    max-height: 90vh;
                    overflow-y: auto;
                }

                .modal-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1.5rem;
                }

                .modal-header h2 {
                    font-size: 1.5rem;
                    color: #111827;
                }

                .modal-close {
                    background: none;
                    border: none;
                    font-size: 1.25rem;
                    color: #6b7280;
                    cursor: pointer;
                }

                .modal-close:hover {
                    color: #374151;
                }

                .progress {
                    margin-bottom: 2rem;
                }

                .progress-labels {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.875rem;
                    color: #4b5563;
                    margin-bottom: 0.5rem;
                }

                .progress-track {
                    width: 100%;
                    height: 8px;
                    background: #e5e7eb;
                    border-radius: 9999px;
                }

                .progress-fill {
                    height: 8px;
                    background: #1d4ed8;
                    border-radius: 9999px;
                    transition: width 0.3s ease;
                }

                .step-fields h3 {
                    font-size: 1.125rem;
                    color: #111827;
                    margin-bottom: 1rem;
                }

                .form-field {
                    margin-bottom: 1rem;
                }

                .form-field label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #374151;
                    margin-bottom: 0.5rem;
                }

                .form-field input,
                .form-field select,
                .form-field textarea {
                    width: 100%;
                    padding: 0.5rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    font-size: 1rem;
                }

                .form-field input:focus,
                .form-field select:focus,
                .form-field textarea:focus {
                    outline: 2px solid #1d4ed8;
                    border-color: transparent;
                }

                .badge-choices {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .badge-choice {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    cursor: pointer;
                }

                .badge-choice:hover {
                    background: #f9fafb;
                }

                .badge-choice-icon {
                    font-size: 1.5rem;
                }

                .badge-choice-text {
                    display: flex;
                    flex-direction: column;
                }

                .badge-choice-name {
                    font-weight: 500;
                    color: #111827;
                }

                .badge-choice-price {
                    font-size: 0.875rem;
                    color: #4b5563;
                }

                .wizard-buttons {
                    display: flex;
                    justify-content: space-between;
                    margin-top: 2rem;
                }

                .wizard-back {
                    padding: 0.5rem 1.5rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    background: #fff;
                    color: #374151;
                    cursor: pointer;
                }

                .wizard-back:hover {
                    background: #f9fafb;
                }

                .wizard-next {
                    margin-left: auto;
                    padding: 0.5rem 1.5rem;
                    border: none;
                    border-radius: 8px;
                    background: #1d4ed8;
                    color: #fff;
                    cursor: pointer;
                }

                .wizard-next:hover {
                    background: #1e40af;
                }

                .submitted-panel {
                    text-align: center;
                    padding: 2rem 0;
                }

                .submitted-check {
                    width: 64px;
                    height: 64px;
                    margin: 0 auto 1rem;
                    border-radius: 50%;
                    background: #dcfce7;
                    color: #16a34a;
                    font-size: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .submitted-panel h3 {
                    font-size: 1.25rem;
                    color: #111827;
                    margin-bottom: 0.5rem;
                }

                .submitted-panel p {
                    color: #4b5563;
                }
                "#}
            </style>
        </div>
    }
}

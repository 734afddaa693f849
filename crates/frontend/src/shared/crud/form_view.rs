//! Generic create/edit form bound to a [`FormViewState`].

use contracts::shared::{EntityId, EntityStatus, SelectOption};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use super::api::ResourceApi;
use super::descriptor::{FieldDescriptor, FieldKind, FormDescriptor};
use super::form_state::{FormMode, FormViewState, OptionsOutcome, OptionsRequest, ValidationError};
use super::preview::BrowserObjectUrls;
use super::Phase;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::icons::icon;
use crate::shared::toast::{use_toast, ToastService};

type FormSignal = RwSignal<FormViewState<BrowserObjectUrls>, LocalStorage>;

fn spawn_options<A>(
    api: StoredValue<A, LocalStorage>,
    state: FormSignal,
    toast: ToastService,
    request: OptionsRequest,
) where
    A: ResourceApi + Clone + 'static,
{
    let Some(client) = api.try_get_value() else {
        return;
    };
    spawn_local(async move {
        let result = client.options(&request.source, &request.parent_value).await;
        match state.try_update(|s| s.apply_options(&request, result)) {
            None => log::debug!("form unmounted, options for {} dropped", request.field),
            Some(OptionsOutcome::Applied) => {}
            Some(OptionsOutcome::Stale) => {
                log::debug!("stale options for {} (parent {:?}) dropped", request.field, request.parent_value)
            }
            Some(OptionsOutcome::Failed(e)) => {
                toast.error(format!("Failed to load options for {}: {}", request.field, e));
            }
        }
    });
}

fn status_options() -> Vec<SelectOption> {
    EntityStatus::ALL
        .iter()
        .map(|s| SelectOption::new(s.code().to_string(), s.label()))
        .collect()
}

fn picked_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    let input = ev.target()?.dyn_into::<HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

#[component]
pub fn ResourceMutationForm<A>(
    api: A,
    descriptor: FormDescriptor,
    /// Record to edit; `None` renders a create form.
    id: Option<EntityId>,
) -> impl IntoView
where
    A: ResourceApi + Clone + 'static,
{
    let toast = use_toast();
    let navigate = use_navigate();
    let api = StoredValue::new_local(api);
    let title = descriptor.title;
    let list_route = descriptor.list_route;
    let fields = descriptor.fields.clone();
    let mode = match id {
        Some(id) => FormMode::Edit(id),
        None => FormMode::Create,
    };
    let is_edit = matches!(mode, FormMode::Edit(_));

    let state: FormSignal = RwSignal::new_local(FormViewState::new(
        descriptor,
        mode.clone(),
        BrowserObjectUrls,
    ));

    for request in state.try_update(|s| s.mount_requests()).unwrap_or_default() {
        spawn_options(api, state, toast, request);
    }

    if let (FormMode::Edit(id), Some(client)) = (mode.clone(), api.try_get_value()) {
        spawn_local(async move {
            match client.fetch_one(&id).await {
                Ok(record) => {
                    let requests = state.try_update(|s| s.hydrate(&record)).unwrap_or_default();
                    for request in requests {
                        spawn_options(api, state, toast, request);
                    }
                }
                Err(e) => {
                    let _ = state.try_update(|s| s.load_failed());
                    toast.error(format!("Failed to load record {}: {}", id, e));
                }
            }
        });
    }

    on_cleanup(move || {
        let _ = state.try_update_untracked(|s| s.release_files());
    });

    let set_field = move |name: &'static str, value: String| {
        for request in state.try_update(|s| s.set_field(name, value)).unwrap_or_default() {
            spawn_options(api, state, toast, request);
        }
    };

    let go_back = {
        let navigate = navigate.clone();
        move |_| navigate(list_route, NavigateOptions::default())
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = match state.try_update(|s| s.begin_submit()) {
            None | Some(Err(ValidationError::NotReady)) => return,
            Some(Err(e)) => {
                toast.error(e.to_string());
                return;
            }
            Some(Ok(payload)) => payload,
        };
        let Some(client) = api.try_get_value() else {
            return;
        };
        let mode = mode.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = match &mode {
                FormMode::Create => client.create(payload).await,
                FormMode::Edit(id) => client.update(id, payload).await,
            };
            match result {
                Ok(()) => {
                    if state.try_update(|s| s.submit_succeeded()).is_none() {
                        return;
                    }
                    toast.success(match mode {
                        FormMode::Create => "Created successfully",
                        FormMode::Edit(_) => "Saved successfully",
                    });
                    navigate(list_route, NavigateOptions::default());
                }
                Err(e) => {
                    let _ = state.try_update(|s| s.submit_failed());
                    toast.error(format!("Save failed: {}", e));
                }
            }
        });
    };

    let phase = Signal::derive(move || state.with(|s| s.phase));
    let locked = Signal::derive(move || !state.with(|s| s.is_interactive()));

    view! {
        <div class="page page--form">
            <div class="page__header">
                <h1 class="page__title">
                    {if is_edit { format!("Edit {}", title) } else { format!("New {}", title) }}
                </h1>
                <div class="page__actions">
                    <Button appearance=ButtonAppearance::Subtle on_click=go_back.clone()>
                        {icon("arrow-left")}
                        " Back"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || match phase.get() {
                    Phase::Loading => view! {
                        <div class="form-loading">
                            <Spinner label="Loading..." />
                        </div>
                    }
                    .into_any(),
                    Phase::Error => view! {
                        <div class="form-error">
                            <p>"Could not load this record."</p>
                        </div>
                    }
                    .into_any(),
                    _ => ().into_any(),
                }}
                <form
                    class="form"
                    class:form--hidden=move || matches!(phase.get(), Phase::Loading | Phase::Error)
                    on:submit=on_submit
                >
                    {fields
                        .into_iter()
                        .map(|field| render_field(field, state, locked, set_field))
                        .collect_view()}
                    <div class="form__actions">
                        <Button appearance=ButtonAppearance::Secondary on_click=go_back>
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            button_type=ButtonType::Submit
                            disabled=locked
                        >
                            {icon("save")}
                            {move || if phase.get() == Phase::Submitting { " Saving..." } else { " Save" }}
                        </Button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn render_field<F>(
    field: FieldDescriptor,
    state: FormSignal,
    locked: Signal<bool>,
    set_field: F,
) -> AnyView
where
    F: Fn(&'static str, String) + Copy + Send + Sync + 'static,
{
    let name = field.name;
    let value = Signal::derive(move || state.with(|s| s.value(name).to_string()));
    let on_input = Callback::new(move |v: String| set_field(name, v));
    let placeholder = field.placeholder.unwrap_or_default();

    match field.kind {
        FieldKind::Text | FieldKind::Email | FieldKind::Number => {
            let input_type = match field.kind {
                FieldKind::Email => "email",
                FieldKind::Number => "number",
                _ => "text",
            };
            view! {
                <Input
                    id=name
                    label=field.label
                    value=value
                    on_input=on_input
                    placeholder=placeholder
                    input_type=input_type
                    disabled=locked
                    required=field.required
                />
            }
            .into_any()
        }
        FieldKind::TextArea => view! {
            <Textarea
                id=name
                label=field.label
                value=value
                on_input=on_input
                placeholder=placeholder
                disabled=locked
                required=field.required
            />
        }
        .into_any(),
        FieldKind::Select(_) => view! {
            <Select
                id=name
                label=field.label
                value=value
                on_change=on_input
                options=Signal::derive(move || state.with(|s| s.options(name).to_vec()))
                disabled=locked
                required=field.required
            />
        }
        .into_any(),
        FieldKind::Dependent { parent, .. } => {
            let parent_empty = move || state.with(|s| s.value(parent).is_empty());
            view! {
                <Select
                    id=name
                    label=field.label
                    value=value
                    on_change=on_input
                    options=Signal::derive(move || state.with(|s| s.options(name).to_vec()))
                    placeholder=Signal::derive(move || {
                        if parent_empty() { "Select the parent first".to_string() } else { "Select...".to_string() }
                    })
                    disabled=Signal::derive(move || locked.get() || parent_empty())
                    required=field.required
                />
            }
            .into_any()
        }
        FieldKind::Status => view! {
            <Select
                id=name
                label=field.label
                value=value
                on_change=on_input
                options=status_options()
                disabled=locked
                required=field.required
            />
        }
        .into_any(),
        FieldKind::File { accept } => {
            let is_video = accept.starts_with("video");
            let preview = move || state.with(|s| s.preview(name));
            let filename = move || state.with(|s| s.selected_filename(name).map(str::to_string));
            view! {
                <div class="form__group form__group--file">
                    <label class="form__label" for=name>
                        {field.label}
                        {field.required.then(|| view! { <span class="form__required">" *"</span> })}
                    </label>
                    <label class="file-picker">
                        {icon("upload")}
                        <span>{move || filename().unwrap_or_else(|| "Choose file...".to_string())}</span>
                        <input
                            id=name
                            type="file"
                            class="file-picker__input"
                            accept=accept
                            disabled=move || locked.get()
                            on:change=move |ev| {
                                let Some(file) = picked_file(&ev) else {
                                    let _ = state.try_update(|s| s.clear_file(name));
                                    return;
                                };
                                let filename = file.name();
                                if let Some(Err(e)) = state.try_update(|s| s.set_file(name, file, &filename)) {
                                    log::warn!("preview for {} failed: {}", filename, e);
                                }
                            }
                        />
                    </label>
                    {move || preview().map(|src| {
                        if is_video {
                            view! { <video class="file-preview" src=src controls=true /> }.into_any()
                        } else {
                            view! { <img class="file-preview" src=src alt="" /> }.into_any()
                        }
                    })}
                </div>
            }
            .into_any()
        }
    }
}

use super::catalog_list::CatalogScreen;
use super::catalog_ui::{field_value, with_field, CatalogUi, FieldDef, FieldKind};
use contracts::domain::a008_proveedor::{ESTATUS_ACTIVO, ESTATUS_INACTIVO};
use contracts::shared::list::{FormMode, ListAction};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::shared::modal::Modal;

/// Create/edit modal of the catalog list
pub fn catalog_form<T: CatalogUi>(screen: CatalogScreen<T>) -> impl IntoView {
    let state = screen.state;

    let is_edit = Signal::derive(move || {
        state.with(|s| s.form.as_ref().map(|f| f.is_edit()).unwrap_or(false))
    });
    let saving = Signal::derive(move || {
        state.with(|s| s.form.as_ref().map(|f| f.saving).unwrap_or(false))
    });
    let server_error =
        move || state.with(|s| s.form.as_ref().and_then(|f| f.server_error.clone()));

    let title = match state.with_untracked(|s| s.form.as_ref().map(|f| f.mode)) {
        Some(FormMode::Edit(key)) => format!("Editar {} {}", T::element_name(), key),
        _ => format!("Nuevo {}", T::element_name()),
    };

    let close = Callback::new(move |_| screen.dispatch(ListAction::CloseForm));
    let submit = move || screen.dispatch(ListAction::SubmitRequested);

    let fields = T::form_fields()
        .into_iter()
        .map(|field| form_field(screen, field, field.name == T::key_field(), is_edit))
        .collect_view();

    view! {
        <Modal
            title=title
            on_close=close
            action_buttons=move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| close.run(())>
                    "Cancelar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| submit()
                    disabled=saving
                >
                    {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                </Button>
            }
        >
            <form
                class="details-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                {fields}
                {move || server_error().map(|message| view! {
                    <div class="alert alert--error">{message}</div>
                })}
            </form>
        </Modal>
    }
}

fn form_field<T: CatalogUi>(
    screen: CatalogScreen<T>,
    field: FieldDef,
    is_key: bool,
    is_edit: Signal<bool>,
) -> impl IntoView {
    let state = screen.state;
    let name = field.name;

    let value = move || {
        state.with(|s| {
            s.form
                .as_ref()
                .map(|f| field_value(&f.draft, name))
                .unwrap_or_default()
        })
    };
    let error = move || {
        state.with(|s| {
            s.form
                .as_ref()
                .and_then(|f| f.errors.get(name).map(str::to_string))
        })
    };
    let on_edit = move |raw: String| {
        let draft = state.with_untracked(|s| {
            s.form
                .as_ref()
                .and_then(|f| with_field(&f.draft, name, field.kind, &raw))
        });
        if let Some(draft) = draft {
            screen.dispatch(ListAction::DraftEdited { field: name, draft });
        }
    };
    let disabled = move || is_key && is_edit.get();

    let input = match field.kind {
        FieldKind::Number => view! {
            <input
                type="number"
                id=name
                class="form__input"
                prop:value=value
                disabled=disabled
                on:input=move |ev| on_edit(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Text { max_len } => view! {
            <input
                type="text"
                id=name
                class="form__input"
                maxlength=max_len.map(|n| n.to_string())
                prop:value=value
                on:input=move |ev| on_edit(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Select { lookup } | FieldKind::OptionalSelect { lookup } => {
            let placeholder = match field.kind {
                FieldKind::Select { .. } => "Seleccione...",
                _ => "(ninguno)",
            };
            let options = move || {
                state.with(|s| {
                    s.resolver()
                        .table(lookup)
                        .map(|table| table.options())
                        .unwrap_or_default()
                })
            };
            view! {
                <select
                    id=name
                    class="form__select"
                    prop:value=value
                    on:change=move |ev| on_edit(event_target_value(&ev))
                >
                    <option value="">{placeholder}</option>
                    {move || options().into_iter().map(|(key, description)| view! {
                        <option value=key.to_string() selected=move || value() == key.to_string()>
                            {format!("{} - {}", key, description)}
                        </option>
                    }).collect_view()}
                </select>
            }
            .into_any()
        }
        FieldKind::Estatus => view! {
            <select
                id=name
                class="form__select"
                prop:value=value
                on:change=move |ev| on_edit(event_target_value(&ev))
            >
                <option value=ESTATUS_ACTIVO>"Activo"</option>
                <option value=ESTATUS_INACTIVO>"Inactivo"</option>
            </select>
        }
        .into_any(),
    };

    view! {
        <div class="form-group" class:form-group--error=move || error().is_some()>
            <label for=name>{field.label}</label>
            {input}
            {move || error().map(|message| view! {
                <span class="form__error">{message}</span>
            })}
        </div>
    }
}

use super::api::SuelasApi;
use super::grid::{producto_cells, with_row, Grid, GridRow};
use crate::shared::icons::icon;
use crate::shared::notifications::{use_notifications, Notifications};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::shared::notice::NoticeKind;
use contracts::usecases::u505_asignacion_suelas::{
    buscar_suela, cargar_corrida, filas_completas, guardar_todo, resolver_producto, SuelaFila,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, ButtonSize};

#[component]
pub fn AsignacionSuelasView() -> impl IntoView {
    let notifications = use_notifications();
    let grid = Grid::<SuelaFila>::new();
    let guardando = RwSignal::new(false);

    let completas = Signal::derive(move || {
        let filas: Vec<SuelaFila> = grid.rows.with(|rows| rows.iter().map(|r| r.fila.get()).collect());
        filas_completas(&filas).len()
    });

    let guardar = move || {
        if guardando.get_untracked() {
            return;
        }
        guardando.set(true);
        let filas = grid.snapshot();
        spawn_local(async move {
            let notice = guardar_todo(&SuelasApi, &filas).await;
            if notice.kind == NoticeKind::Success {
                grid.clear();
            }
            notifications.push(notice);
            guardando.set(false);
        });
    };

    view! {
        <PageFrame page_id="u505_asignacion_suelas--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("layers")}
                    <h1 class="page__title">"Asignación de Suelas"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| grid.add_row()>
                        {icon("plus")}
                        " Agregar Fila"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| guardar()
                        disabled=Signal::derive(move || guardando.get() || completas.get() == 0)
                    >
                        {icon("save")}
                        {move || if guardando.get() {
                            " Guardando...".to_string()
                        } else {
                            format!(" Guardar Todo ({})", completas.get())
                        }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <table class="table__data grid-editable">
                    <thead>
                        <tr>
                            <th>"Estilo"</th>
                            <th>"Corrida"</th>
                            <th>"Desc. Corrida"</th>
                            <th>"Combinación"</th>
                            <th>"Desc. Combinación"</th>
                            <th>"Producto"</th>
                            <th>"Suela"</th>
                            <th>"Desc. Suela"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || grid.rows.get()
                            key=|row| row.id
                            children=move |row| suela_row(grid, row, notifications)
                        />
                    </tbody>
                </table>
            </div>
        </PageFrame>
    }
}

fn suela_row(grid: Grid<SuelaFila>, row: GridRow<SuelaFila>, notifications: Notifications) -> impl IntoView {
    let fila = row.fila;

    let on_corrida = Callback::new(move |_| {
        spawn_local(async move {
            let result = with_row(fila, move |mut r| async move {
                let result = cargar_corrida(&SuelasApi, &mut r.producto).await;
                (r, result)
            })
            .await;
            if let Err(notice) = result {
                notifications.push(notice);
            }
        });
    });

    let on_combinacion = Callback::new(move |combinacion: i32| {
        spawn_local(async move {
            let result = with_row(fila, move |mut r| async move {
                let result = resolver_producto(&SuelasApi, &mut r.producto, combinacion).await;
                (r, result)
            })
            .await;
            if let Err(notice) = result {
                notifications.push(notice);
            }
        });
    });

    let on_suela = move || {
        spawn_local(async move {
            let result = with_row(fila, move |mut r| async move {
                let result = buscar_suela(&SuelasApi, &mut r).await;
                (r, result)
            })
            .await;
            if let Err(notice) = result {
                notifications.push(notice);
            }
        });
    };

    view! {
        <tr>
            {producto_cells(fila, |r| &r.producto, |r| &mut r.producto, on_corrida, on_combinacion)}
            <td>
                <input
                    type="number"
                    class="form__input form__input--compact"
                    prop:value=move || fila.with(|r| r.suela.clone())
                    on:input=move |ev| fila.update(|r| r.suela = event_target_value(&ev))
                    on:change=move |_| on_suela()
                />
            </td>
            <td class="cell--readonly">{move || fila.with(|r| r.descripcion_suela.clone())}</td>
            <td>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| grid.remove_row(row.id)
                >
                    {icon("trash")}
                </Button>
            </td>
        </tr>
    }
}

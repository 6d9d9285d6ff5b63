//! Editable product rows shared by the sole and barcode screens.
//!
//! Every row owns its own signal so typing in one input does not rebuild the
//! grid (and steal focus). Rows are keyed by a random id for `<For>`.

use contracts::usecases::u505_asignacion_suelas::ProductoFila;
use leptos::prelude::*;
use uuid::Uuid;

pub struct GridRow<R: Send + Sync + 'static> {
    pub id: Uuid,
    pub fila: RwSignal<R>,
}

impl<R: Send + Sync + 'static> Clone for GridRow<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for GridRow<R> {}

impl<R: Default + Send + Sync + 'static> GridRow<R> {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            fila: RwSignal::new(R::default()),
        }
    }
}

/// Grid rows plus add/remove/clear
pub struct Grid<R: Send + Sync + 'static> {
    pub rows: RwSignal<Vec<GridRow<R>>>,
}

impl<R: Send + Sync + 'static> Clone for Grid<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for Grid<R> {}

impl<R: Clone + Default + Send + Sync + 'static> Grid<R> {
    /// A grid with one blank row
    pub fn new() -> Self {
        Self {
            rows: RwSignal::new(vec![GridRow::blank()]),
        }
    }

    pub fn add_row(self) {
        self.rows.update(|rows| rows.push(GridRow::blank()));
    }

    /// Removes a row; the grid always keeps at least one
    pub fn remove_row(self, id: Uuid) {
        self.rows.update(|rows| {
            if rows.len() > 1 {
                rows.retain(|row| row.id != id);
            }
        });
    }

    /// Back to a single blank row
    pub fn clear(self) {
        self.rows.set(vec![GridRow::blank()]);
    }

    /// Current values of every row, in grid order
    pub fn snapshot(self) -> Vec<R> {
        self.rows
            .get_untracked()
            .iter()
            .map(|row| row.fila.get_untracked())
            .collect()
    }
}

/// Estilo, corrida and combinacion cells of one row.
///
/// `on_corrida` runs when estilo or corrida are changed, `on_combinacion` when a
/// combination is picked.
pub fn producto_cells<R: Send + Sync + 'static>(
    fila: RwSignal<R>,
    lens: fn(&R) -> &ProductoFila,
    lens_mut: fn(&mut R) -> &mut ProductoFila,
    on_corrida: Callback<()>,
    on_combinacion: Callback<i32>,
) -> impl IntoView {
    let read = move |f: fn(&ProductoFila) -> String| move || fila.with(|r| f(lens(r)));

    view! {
        <td>
            <input
                type="number"
                class="form__input form__input--compact"
                prop:value=read(|p| p.estilo.clone())
                on:input=move |ev| fila.update(|r| lens_mut(r).estilo = event_target_value(&ev))
                on:change=move |_| on_corrida.run(())
            />
        </td>
        <td>
            <input
                type="number"
                class="form__input form__input--compact"
                prop:value=read(|p| p.corrida.clone())
                on:input=move |ev| fila.update(|r| lens_mut(r).corrida = event_target_value(&ev))
                on:change=move |_| on_corrida.run(())
            />
        </td>
        <td class="cell--readonly">{read(|p| p.descripcion_corrida.clone())}</td>
        <td>
            <select
                class="form__select form__select--compact"
                prop:value=read(|p| p.combinacion.map(|c| c.to_string()).unwrap_or_default())
                disabled=move || fila.with(|r| lens(r).combinaciones.is_empty())
                on:change=move |ev| {
                    if let Ok(combinacion) = event_target_value(&ev).parse::<i32>() {
                        on_combinacion.run(combinacion);
                    }
                }
            >
                <option value="">"Seleccione..."</option>
                {move || fila.with(|r| {
                    lens(r)
                        .combinaciones
                        .iter()
                        .map(|c| {
                            let value = c.combinacion;
                            let selected = lens(r).combinacion == Some(value);
                            view! {
                                <option value=value.to_string() selected=selected>
                                    {format!("{} - {}", c.combinacion, c.descripcion)}
                                </option>
                            }
                        })
                        .collect_view()
                })}
            </select>
        </td>
        <td class="cell--readonly">{read(|p| p.combinacion_descripcion.clone())}</td>
        <td class="cell--readonly cell--number">
            {read(|p| p.producto.map(|id| id.to_string()).unwrap_or_default())}
        </td>
    }
}

/// Runs an async row workflow on a copy of the row and stores the result
pub async fn with_row<R, F, Fut, T>(fila: RwSignal<R>, work: F) -> T
where
    R: Clone + Send + Sync + 'static,
    F: FnOnce(R) -> Fut,
    Fut: std::future::Future<Output = (R, T)>,
{
    let (updated, result) = work(fila.get_untracked()).await;
    fila.set(updated);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_keeps_one_row() {
        let owner = Owner::new();
        owner.with(|| {
            let grid = Grid::<ProductoFila>::new();
            let first = grid.rows.get_untracked()[0].id;
            grid.remove_row(first);
            assert_eq!(grid.rows.get_untracked().len(), 1);

            grid.add_row();
            grid.add_row();
            assert_eq!(grid.snapshot().len(), 3);
            grid.remove_row(first);
            assert_eq!(grid.rows.get_untracked().len(), 2);

            grid.clear();
            assert_eq!(grid.snapshot(), vec![ProductoFila::default()]);
        });
    }
}

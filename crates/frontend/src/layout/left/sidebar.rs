//! Sidebar with the collapsible CPT, CMP and Inyección menus

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn item(id: &'static str, icon_name: &'static str) -> (&'static str, &'static str, &'static str) {
    (id, tab_label_for_key(id), icon_name)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "cpt",
            label: "CPT",
            icon: "database",
            items: vec![
                item("a001_color", "palette"),
                item("a002_material", "layers"),
                item("a003_corrida", "ruler"),
                item("a004_marca", "tag"),
                item("a005_sublinea", "list"),
                item("a006_linea", "list"),
                item("a007_combinacion", "layers"),
                item("a008_proveedor", "building"),
                item("u506_codigos_barras", "barcode"),
            ],
        },
        MenuGroup {
            id: "cmp",
            label: "CMP",
            icon: "package",
            items: vec![
                item("u504_paquetes", "package"),
                item("u505_asignacion_suelas", "layers"),
            ],
        },
        MenuGroup {
            id: "inyeccion",
            label: "Inyección",
            icon: "activity",
            items: vec![
                item("u501_captura_avance", "barcode"),
                item("u502_verificacion_lotes", "check"),
                item("u503_reporte_diario", "file-text"),
                item("u503_reporte_semanal", "file-text"),
                item("u503_inventario_proceso", "file-text"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec!["inyeccion".to_string()]);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        {
                            let gid_show = group_id.clone();
                            let items_stored = StoredValue::new(group.items.clone());
                            view! {
                                <Show when=move || expanded_groups.get().contains(&gid_show)>
                                    <div class="app-sidebar__children">
                                        {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.get().as_deref() == Some(id)
                                                    }
                                                    style:padding-left="10px"
                                                    on:click=move |_| {
                                                        ctx.open_tab(id, label);
                                                    }
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        }
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_item_has_a_label() {
        for group in get_menu_groups() {
            for (id, label, _) in group.items {
                assert!(!label.is_empty(), "missing label for {}", id);
            }
        }
    }
}

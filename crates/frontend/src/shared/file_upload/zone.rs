//! Drop zone bound to one staging slot.
//!
//! Files arrive by drag & drop or the hidden file input, go through the slot's
//! size/type filter, and rejections surface as error toasts. Single image slots
//! show an inline preview whose blob URL is revoked on replace and on unmount.

use super::{files_from_list, BrowserFile, ObjectUrl};
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use contracts::shared::file_staging::{format_file_size, SlotMode, StagedFile, StagingSlot};
use leptos::html;
use leptos::prelude::*;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
struct FileChip {
    id: Uuid,
    name: String,
    size_label: String,
    is_image: bool,
}

impl From<&BrowserFile> for FileChip {
    fn from(file: &BrowserFile) -> Self {
        Self {
            id: file.id,
            name: file.name(),
            size_label: format_file_size(file.size()),
            is_image: file.is_image(),
        }
    }
}

#[component]
pub fn FileUploadZone(
    slot: RwSignal<StagingSlot<BrowserFile>, LocalStorage>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let i18n = use_i18n();
    let notifier = use_notifier();

    let config = slot.with_untracked(|s| s.config().clone());
    let label_key = config.label_key;
    let accept = config.category.accept_attr();
    let is_multiple = config.mode == SlotMode::Multiple;

    let input_ref = NodeRef::<html::Input>::new();
    let drag_active = RwSignal::new(false);

    let stage = move |files: Vec<BrowserFile>| {
        if files.is_empty() {
            return;
        }
        let rejected = slot.try_update(|s| s.accept(files)).unwrap_or_default();
        for rejection in rejected {
            notifier.error(
                i18n.t_untracked(rejection.message_key()),
                rejection.file_name().to_string(),
            );
        }
    };

    let remove = move |id: Uuid| {
        slot.update(|s| {
            let index = s.files().iter().position(|f| f.id == id);
            if let Some(index) = index {
                s.remove(index);
            }
        });
    };

    // ============================================================================
    // Preview
    // ============================================================================

    let preview = StoredValue::new_local(None::<(Uuid, ObjectUrl)>);
    let preview_src = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let candidate = slot.with(|s| s.preview_candidate().cloned());
        let held = preview.with_value(|p| p.as_ref().map(|(id, _)| *id));
        if candidate.as_ref().map(|f| f.id) == held {
            return;
        }

        let next = candidate.and_then(|f| match ObjectUrl::for_blob(&f.file) {
            Ok(url) => Some((f.id, url)),
            Err(e) => {
                log::warn!("preview for '{}' unavailable: {}", f.name(), e);
                None
            }
        });
        preview_src.set(next.as_ref().map(|(_, url)| url.url().to_string()));
        // replacing the stored guard revokes the previous URL
        preview.set_value(next);
    });

    on_cleanup(move || {
        let _ = preview.try_update_value(|p| p.take());
    });

    // ============================================================================
    // Handlers
    // ============================================================================

    let open_picker = move |_| {
        if disabled.get_untracked() {
            return;
        }
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        if !disabled.get_untracked() {
            drag_active.set(true);
        }
    };

    let on_drag_leave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(false);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(false);
        if disabled.get_untracked() {
            return;
        }
        if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
            stage(files_from_list(&list));
        }
    };

    let on_change = move |_| {
        let Some(input) = input_ref.get() else {
            return;
        };
        if let Some(list) = input.files() {
            stage(files_from_list(&list));
        }
        // allow picking the same file again after removing it
        input.set_value("");
    };

    let chips = move || slot.with(|s| s.files().into_iter().map(FileChip::from).collect::<Vec<_>>());

    view! {
        <div class="upload">
            <span class="form__label">{move || i18n.t(label_key)}</span>
            <input
                id=id
                type="file"
                class="upload__input"
                node_ref=input_ref
                accept=accept
                multiple=is_multiple
                disabled=move || disabled.get()
                on:change=on_change
            />
            <div
                class=move || {
                    let mut class = String::from("upload__zone");
                    if drag_active.get() {
                        class.push_str(" upload__zone--active");
                    }
                    if disabled.get() {
                        class.push_str(" upload__zone--disabled");
                    }
                    class
                }
                role="button"
                tabindex="0"
                on:click=open_picker
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                {icon("upload")}
                <p class="upload__hint">
                    {move || {
                        if drag_active.get() { i18n.t("dropHere") } else { i18n.t("dragDrop") }
                    }}
                </p>
            </div>

            <Show when=move || preview_src.with(|src| src.is_some())>
                <img
                    class="upload__preview"
                    src=move || preview_src.get().unwrap_or_default()
                    alt=move || i18n.t(label_key)
                />
            </Show>

            <ul class="upload__files">
                <For
                    each=chips
                    key=|chip| chip.id
                    children=move |chip: FileChip| {
                        let id = chip.id;
                        view! {
                            <li class="upload__chip">
                                {if chip.is_image { icon("image") } else { icon("file") }}
                                <span class="upload__chip-name" title=chip.name.clone()>{chip.name.clone()}</span>
                                <span class="upload__chip-size">{chip.size_label}</span>
                                <button
                                    type="button"
                                    class="upload__chip-remove"
                                    title=move || i18n.t("removeFile")
                                    disabled=move || disabled.get()
                                    on:click=move |_| remove(id)
                                >
                                    {icon("x")}
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}

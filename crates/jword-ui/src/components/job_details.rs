//! Job details form with one-field-at-a-time editing.

use dioxus::prelude::Key;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdPencil};

use jword_core::{EditState, JobDetails, JobField};

/// Props for the [`JobDetailsForm`] component.
#[derive(Props, Clone, PartialEq)]
pub struct JobDetailsFormProps {
    /// Current field values. Edits are applied by the parent as the
    /// user types; there is no draft buffer here.
    pub details: JobDetails,
    /// Which field, if any, is in editing mode.
    pub editing: EditState,
    /// Called when the user clicks a field's pencil button.
    pub on_begin_edit: EventHandler<JobField>,
    /// Called on every keystroke with the field and its new value.
    pub on_change: EventHandler<(JobField, String)>,
    /// Save action: check button or Enter on a single-line field.
    pub on_commit: EventHandler<()>,
    /// Escape: leave editing mode without reverting typed text.
    pub on_cancel: EventHandler<()>,
}

/// Card with one row per job field.
///
/// Each row shows a read-only paragraph until its pencil button is
/// clicked; then it shows a focused input (or textarea for the
/// description). Selecting another field's pencil implicitly closes
/// the current one, since the parent's [`EditState`] can only name one
/// field.
#[component]
pub fn JobDetailsForm(props: JobDetailsFormProps) -> Element {
    rsx! {
        div { class: "details-card",
            for field in JobField::ALL {
                {render_row(&props, field)}
            }
        }
    }
}

/// Render one label/value row.
fn render_row(props: &JobDetailsFormProps, field: JobField) -> Element {
    let is_editing = props.editing.is_editing(field);
    let value = props.details.get(field).to_owned();
    let label = field.label();

    let on_begin_edit = props.on_begin_edit;
    let on_change = props.on_change;
    let on_commit = props.on_commit;
    let on_cancel = props.on_cancel;

    let toggle = move |_| {
        if is_editing {
            on_commit.call(());
        } else {
            on_begin_edit.call(field);
        }
    };

    // Enter commits single-line fields only; Escape always leaves
    // editing mode. Typed text stays as-is either way.
    let keydown = move |evt: KeyboardEvent| match evt.key() {
        Key::Enter if !field.is_multiline() => on_commit.call(()),
        Key::Escape => on_cancel.call(()),
        _ => {}
    };

    let input = move |evt: FormEvent| {
        on_change.call((field, evt.value()));
    };

    rsx! {
        div { class: "details-row",
            div { class: "details-row-head",
                h3 { class: "details-label", "{label}" }
                button {
                    class: "icon-button",
                    aria_label: if is_editing { "Save {label}" } else { "Edit {label}" },
                    onclick: toggle,
                    if is_editing {
                        Icon { icon: LdCheck, width: 16, height: 16 }
                    } else {
                        Icon { icon: LdPencil, width: 16, height: 16 }
                    }
                }
            }

            if is_editing {
                if field.is_multiline() {
                    textarea {
                        class: "details-input",
                        rows: 5,
                        value: "{value}",
                        autofocus: true,
                        oninput: input,
                        onkeydown: keydown,
                    }
                } else {
                    input {
                        r#type: "text",
                        class: "details-input",
                        value: "{value}",
                        autofocus: true,
                        oninput: input,
                        onkeydown: keydown,
                    }
                }
            } else {
                p { class: "details-value", "{value}" }
            }
        }
    }
}

use dioxus::prelude::*;

use catalog_common::draft::DraftField;
use catalog_common::form::{submit, Navigation, ProductForm, SubmitResult};

use super::app::Route;
use super::shared_state::{use_catalog, use_catalog_client, use_categories_on_mount, SignalCell};

/// Product creation page. The form state lives only as long as this page.
#[component]
pub fn NewProductForm() -> Element {
    use_categories_on_mount();
    let catalog = use_catalog();
    let client = use_catalog_client();
    let nav = use_navigator();
    let mut form = use_signal(ProductForm::new);

    let follow = move |navigation: Navigation| match navigation {
        Navigation::Products => {
            nav.push(Route::all_products());
        }
        Navigation::Back => nav.go_back(),
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(client) = client.clone() else {
            return;
        };
        spawn(async move {
            if let SubmitResult::Created { navigate, .. } =
                submit(&client, &SignalCell(form)).await
            {
                follow(navigate);
            }
        });
    };

    let state = form.read();
    let draft = state.draft().clone();
    let preview = state.image_preview_url().to_string();
    let submitting = state.is_submitting();
    let violation = state.violation().map(|rule| rule.to_string());
    let failure = state.failure().map(ToString::to_string);
    drop(state);

    let categories = catalog.read().categories().items().to_vec();

    rsx! {
        div { class: "product-form",
            h1 { "Add new product" }
            p { "Fill in the product information" }

            form { onsubmit: on_submit,
                div { class: "form-group",
                    label { "Title" }
                    input {
                        name: DraftField::Title.name(),
                        r#type: "text",
                        placeholder: "Product title",
                        value: "{draft.title}",
                        oninput: move |evt| form.write().update_field(DraftField::Title, evt.value()),
                    }
                }
                div { class: "form-group",
                    label { "Price" }
                    input {
                        name: DraftField::Price.name(),
                        r#type: "number",
                        min: "0",
                        step: "0.01",
                        placeholder: "0.00",
                        value: "{draft.price}",
                        oninput: move |evt| form.write().update_field(DraftField::Price, evt.value()),
                    }
                }
                div { class: "form-group",
                    label { "Category" }
                    // offered ids are the loaded categories, not a fixed range
                    select {
                        name: DraftField::CategoryId.name(),
                        value: "{draft.category_id}",
                        onchange: move |evt| form.write().update_field(DraftField::CategoryId, evt.value()),
                        option { value: "", "Choose a category" }
                        {categories.into_iter().map(|category| rsx! {
                            option { key: "{category.id}", value: "{category.id}", "{category.name}" }
                        })}
                    }
                }
                div { class: "form-group",
                    label { "Image URL" }
                    input {
                        name: DraftField::ImageUrl.name(),
                        r#type: "url",
                        placeholder: "https://example.com/image.jpg",
                        value: "{draft.image_url}",
                        oninput: move |evt| form.write().update_field(DraftField::ImageUrl, evt.value()),
                    }
                    if !preview.trim().is_empty() {
                        img { class: "image-preview", src: "{preview}", alt: "Preview" }
                    }
                }
                div { class: "form-group",
                    label { "Description" }
                    textarea {
                        name: DraftField::Description.name(),
                        rows: "3",
                        placeholder: "Product description",
                        value: "{draft.description}",
                        oninput: move |evt| form.write().update_field(DraftField::Description, evt.value()),
                    }
                }

                if let Some(rule) = violation {
                    p { class: "field-error", "{rule}" }
                }
                if let Some(reason) = failure {
                    p { class: "error-state", "Couldn't save product: {reason}" }
                }

                div { class: "form-actions",
                    button { r#type: "submit", disabled: submitting,
                        if submitting { "Saving..." } else { "Save product" }
                    }
                    button {
                        r#type: "button",
                        onclick: move |_| {
                            let navigation = form.write().cancel();
                            follow(navigation);
                        },
                        "Cancel"
                    }
                }
            }
        }
    }
}

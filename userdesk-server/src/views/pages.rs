//! Page builders for each user view

use crate::models::User;

use super::{Component, DisplayLookup, DisplayMode, FormField, InputType, PageEvent};

/// User list: name links to the profile, dob rendered as a date.
pub fn users_page(users: &[User]) -> Result<Vec<Component>, serde_json::Error> {
    let data = users
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(vec![Component::page(vec![
        Component::heading("Users", 2),
        Component::Table {
            data,
            columns: vec![
                DisplayLookup::field("name").on_click(PageEvent::go_to("/user/{id}/")),
                DisplayLookup::field("dob").mode(DisplayMode::Date),
            ],
        },
        Component::div(vec![Component::link(
            vec![Component::button("Add User")],
            PageEvent::go_to("/user/add/"),
        )]),
    ])])
}

/// Blank add-user form.
pub fn add_user_page() -> Vec<Component> {
    vec![Component::page(vec![
        Component::heading("Add User", 2),
        Component::paragraph("Add a user to the system"),
        Component::form(
            "/api/user/add/",
            vec![
                FormField::input("name", "Name", InputType::Text),
                FormField::input("dob", "Dob", InputType::Date),
            ],
        ),
    ])]
}

/// Profile page with a delete-confirmation form.
pub fn user_page(user: &User) -> Result<Vec<Component>, serde_json::Error> {
    Ok(vec![Component::page(vec![
        Component::heading(user.name.clone(), 2),
        Component::link(vec![Component::text("Back")], PageEvent::Back),
        Component::Details {
            data: serde_json::to_value(user)?,
            fields: vec![
                DisplayLookup::field("id"),
                DisplayLookup::field("name"),
                DisplayLookup::field("dob").mode(DisplayMode::Date),
            ],
        },
        Component::div(vec![
            Component::heading("Delete User?", 4),
            Component::form(
                format!("/api/user/{}/delete/", user.id),
                vec![FormField::checkbox("confirm", "Confirm")],
            )
            .class("text-left"),
        ])
        .class("card p-4 col-4"),
    ])])
}

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use vet_clinic::state::AppState;
use vet_clinic::web;

fn make_server(state: AppState) -> TestServer {
    let app = web::routes::routes().with_state(state);

    TestServer::new(app).unwrap()
}

const VERON: [(&str, &str); 4] = [
    ("name", "Juan Sebastián Veron"),
    ("phone", "221555232"),
    ("email", "brujita75@hotmail.com"),
    ("address", "13 y 44"),
];

// ─── HOME / NAVBAR ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_home_shows_one_card_per_collection() {
    let server = make_server(common::create_test_state());

    let response = server.get("/").await;

    response.assert_status_ok();

    let html = response.text();
    for label in [
        "Clientes",
        "Proveedores",
        "Productos",
        "Medicinas",
        "Mascotas",
        "Veterinarios",
    ] {
        assert!(html.contains(&format!("data-testid=\"home-{label}\"")), "{label}");
        assert!(html.contains(&format!("data-testid=\"navbar-{label}\"")), "{label}");
    }
    assert!(html.contains("class=\"nav-link active\" data-testid=\"navbar-Home\""));
}

#[tokio::test]
async fn test_navbar_marks_current_collection() {
    let server = make_server(common::create_test_state());

    let html = server.get("/pets").await.text();

    assert!(html.contains("class=\"nav-link active\" data-testid=\"navbar-Mascotas\""));
    assert!(html.contains("class=\"nav-link\" data-testid=\"navbar-Home\""));
    assert!(html.contains("class=\"nav-link\" data-testid=\"navbar-Clientes\""));
}

#[tokio::test]
async fn test_home_database_down_renders_error_page() {
    let server = make_server(common::create_failing_state());

    let response = server.get("/").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

// ─── LIST / CREATE ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_empty_list() {
    let server = make_server(common::create_test_state());

    let response = server.get("/clients").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("No existen clientes"));
    assert!(html.contains("Nuevo cliente"));
}

#[tokio::test]
async fn test_create_client_redirects_to_list() {
    let server = make_server(common::create_test_state());

    let response = server.post("/clients/new").form(&VERON).await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/clients");

    let html = server.get("/clients").await.text();
    assert!(!html.contains("No existen clientes"));
    assert!(html.contains("Juan Sebastián Veron"));
    assert!(html.contains("221555232"));
    assert!(html.contains("brujita75@hotmail.com"));
    assert!(html.contains("13 y 44"));
    assert!(html.contains("href=\"/clients/edit/1\""));
}

#[tokio::test]
async fn test_create_empty_client_shows_messages() {
    let state = common::create_test_state();
    let server = make_server(state.clone());

    let response = server
        .post("/clients/new")
        .form(&[("name", ""), ("phone", ""), ("email", ""), ("address", "")])
        .await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Por favor ingrese un nombre"));
    assert!(html.contains("Por favor ingrese un teléfono"));
    assert!(html.contains("Por favor ingrese un email"));
    assert_eq!(state.clients.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_client_with_invalid_email_keeps_values() {
    let state = common::create_test_state();
    let server = make_server(state.clone());

    let response = server
        .post("/clients/new")
        .form(&[
            ("name", "Juan Sebastián Veron"),
            ("phone", "221555232"),
            ("email", "brujita75"),
            ("address", "13 y 44"),
        ])
        .await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Por favor ingrese un email valido"));
    assert!(html.contains("value=\"Juan Sebastián Veron\""));
    assert!(html.contains("value=\"brujita75\""));
    assert_eq!(state.clients.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_product_with_zero_price() {
    let server = make_server(common::create_test_state());

    let response = server
        .post("/products/new")
        .form(&[("name", "Ampicilina"), ("type", "Antibiotico"), ("price", "0")])
        .await;

    response.assert_status_ok();
    assert!(
        response
            .text()
            .contains("Por favor ingrese un precio mayor a cero")
    );
}

#[tokio::test]
async fn test_create_pet_with_future_birthday() {
    let server = make_server(common::create_test_state());

    let response = server
        .post("/pets/new")
        .form(&[("name", "gatito"), ("breed", "orange"), ("birthday", "2999-01-01")])
        .await;

    response.assert_status_ok();
    assert!(
        response
            .text()
            .contains("Por favor ingrese una fecha de nacimiento valida y anterior a la de hoy")
    );
}

#[tokio::test]
async fn test_create_medicine_dose_messages() {
    let server = make_server(common::create_test_state());

    let cases = [
        ("", "Por favor, ingrese una cantidad de la dosis de la medicina"),
        ("dos", "La dosis debe ser un numero entero"),
        ("11", "La dosis debe estar entre 1 y 10"),
    ];

    for (dose, message) in cases {
        let response = server
            .post("/medicines/new")
            .form(&[("name", "Bravecto"), ("description", "Antiparasitario"), ("dose", dose)])
            .await;

        response.assert_status_ok();
        assert!(response.text().contains(message), "{dose:?}");
    }
}

#[tokio::test]
async fn test_create_vet_renders_speciality_select() {
    let server = make_server(common::create_test_state());

    let html = server.get("/vets/new").await.text();

    assert!(html.contains("<select id=\"speciality\" name=\"speciality\">"));
    assert!(html.contains("<option value=\"Urgencias\">Urgencias</option>"));

    let response = server
        .post("/vets/new")
        .form(&[
            ("name", "Luciana"),
            ("email", "lu@utn.com"),
            ("phone", "221555232"),
            ("speciality", "Urgencias"),
        ])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/vets");
}

// ─── EDIT / UPDATE ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_edit_unknown_record() {
    let server = make_server(common::create_test_state());

    let response = server.get("/clients/edit/100").await;

    response.assert_status_not_found();
    assert!(response.text().contains("client not found"));
}

#[tokio::test]
async fn test_edit_form_is_prefilled() {
    let state = common::create_test_state();
    let client = common::create_client(&state).await;
    let server = make_server(state);

    let response = server.get(&format!("/clients/edit/{}", client.id)).await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Editar cliente"));
    assert!(html.contains(&format!("name=\"id\" value=\"{}\"", client.id)));
    assert!(html.contains("value=\"Juan Sebastián Veron\""));
    assert!(html.contains("value=\"13 y 44\""));
}

#[tokio::test]
async fn test_update_client_through_form() {
    let state = common::create_test_state();
    let client = common::create_client(&state).await;
    let server = make_server(state.clone());

    let id = client.id.to_string();
    let response = server
        .post("/clients/new")
        .form(&[
            ("id", id.as_str()),
            ("name", "Guido Carrillo"),
            ("phone", "221232555"),
            ("email", "goleador@gmail.com"),
            ("address", "1 y 57"),
        ])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);

    let stored = state.clients.get(client.id).await.unwrap();
    assert_eq!(stored.name, "Guido Carrillo");
    assert_eq!(stored.phone, "221232555");
    assert_eq!(stored.email, "goleador@gmail.com");
    assert_eq!(stored.address.as_deref(), Some("1 y 57"));
    assert_eq!(state.clients.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_invalid_update_keeps_stored_values() {
    let state = common::create_test_state();
    let client = common::create_client(&state).await;
    let server = make_server(state.clone());

    let id = client.id.to_string();
    let response = server
        .post("/clients/new")
        .form(&[
            ("id", id.as_str()),
            ("name", "Guido Carrillo"),
            ("phone", ""),
            ("email", "goleador"),
            ("address", ""),
        ])
        .await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Por favor ingrese un teléfono"));
    assert!(html.contains("Por favor ingrese un email valido"));
    assert!(html.contains(&format!("name=\"id\" value=\"{id}\"")));

    let stored = state.clients.get(client.id).await.unwrap();
    assert_eq!(stored, client);
}

#[tokio::test]
async fn test_update_unknown_record() {
    let server = make_server(common::create_test_state());

    let mut form = VERON.to_vec();
    form.push(("id", "100"));

    let response = server.post("/clients/new").form(&form).await;

    response.assert_status_not_found();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_client() {
    let state = common::create_test_state();
    let client = common::create_client(&state).await;
    let server = make_server(state.clone());

    let html = server.get("/clients").await.text();
    assert!(html.contains("aria-label=\"Formulario de eliminación de cliente\""));

    let id = client.id.to_string();
    let response = server
        .post("/clients/delete")
        .form(&[("id", id.as_str())])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/clients");
    assert_eq!(state.clients.count().await.unwrap(), 0);

    let html = server.get("/clients").await.text();
    assert!(html.contains("No existen clientes"));
}

#[tokio::test]
async fn test_delete_unknown_record() {
    let server = make_server(common::create_test_state());

    let response = server.post("/clients/delete").form(&[("id", "100")]).await;

    response.assert_status_not_found();
}

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::{Context, Tera};

use crate::domain::auth::AuthenticatedUser;
use crate::domain::reference::ReferenceData;
use crate::forms::FieldErrors;
use crate::forms::products::{AddProductForm, AddProductFormPayload};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::products::{
    add_product as add_product_service, show_add_product_form as show_add_product_form_service,
    show_products as show_products_service,
};

fn render_form(
    tera: &Tera,
    mut context: Context,
    form: &AddProductForm,
    reference: &ReferenceData,
    errors: &FieldErrors,
    error: Option<&str>,
) -> HttpResponse {
    context.insert("form", form);
    context.insert("categories", &reference.categories);
    context.insert("product_types", &reference.product_types);
    context.insert("errors", errors);
    context.insert("error", &error);
    render_template(tera, "products/add.html", &context)
}

#[get("/dashboard/products")]
pub async fn show_products(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_products_service(&user, repo.get_ref()) {
        Ok(products) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "products",
                &server_config.auth_service_url,
            );
            context.insert("products", &products);
            render_template(&tera, "products/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => redirect("/na"),
        Err(err) => {
            log::error!("Failed to render products page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/dashboard/products/add")]
pub async fn add_product_form(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_add_product_form_service(&user, repo.get_ref()) {
        Ok(reference) => {
            let context = base_context(
                &flash_messages,
                &user,
                "products",
                &server_config.auth_service_url,
            );
            render_form(
                &tera,
                context,
                &AddProductForm::default(),
                &reference,
                &FieldErrors::default(),
                None,
            )
        }
        Err(ServiceError::Unauthorized) => redirect("/na"),
        Err(err) => {
            log::error!("Failed to render add product page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/dashboard/products/add")]
pub async fn add_product(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<AddProductForm>,
) -> impl Responder {
    let context = base_context(
        &flash_messages,
        &user,
        "products",
        &server_config.auth_service_url,
    );

    let payload: AddProductFormPayload = match form.clone().try_into() {
        Ok(payload) => payload,
        Err(e) => {
            log::debug!("{e}");
            return match show_add_product_form_service(&user, repo.get_ref()) {
                Ok(reference) => {
                    render_form(&tera, context, &form, &reference, &e.field_errors(), None)
                }
                Err(ServiceError::Unauthorized) => redirect("/na"),
                Err(err) => {
                    log::error!("Failed to render add product page: {err}");
                    HttpResponse::InternalServerError().finish()
                }
            };
        }
    };

    let mut rng = rand::thread_rng();
    match add_product_service(payload, &user, repo.get_ref(), &mut rng) {
        Ok((submission, reference)) => match submission.redirect_to() {
            Some(location) => {
                FlashMessage::success("تم إنشاء المنتج بنجاح.").send();
                redirect(location)
            }
            None => render_form(
                &tera,
                context,
                &form,
                &reference,
                &FieldErrors::default(),
                submission.error(),
            ),
        },
        Err(ServiceError::Unauthorized) => redirect("/na"),
        Err(err) => {
            log::error!("Failed to add product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

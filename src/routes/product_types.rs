use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::{Context, Tera};

use crate::domain::auth::AuthenticatedUser;
use crate::forms::FieldErrors;
use crate::forms::product_types::{AddProductTypeForm, AddProductTypeFormPayload};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::product_types::{
    add_product_type as add_product_type_service,
    show_add_product_type_form as show_add_product_type_form_service,
    show_product_types as show_product_types_service,
};

fn render_form(
    tera: &Tera,
    mut context: Context,
    form: &AddProductTypeForm,
    errors: &FieldErrors,
    error: Option<&str>,
) -> HttpResponse {
    context.insert("form", form);
    context.insert("errors", errors);
    context.insert("error", &error);
    render_template(tera, "product_types/add.html", &context)
}

#[get("/dashboard/product-types")]
pub async fn show_product_types(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_product_types_service(&user, repo.get_ref()) {
        Ok(product_types) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "product_types",
                &server_config.auth_service_url,
            );
            context.insert("product_types", &product_types);
            render_template(&tera, "product_types/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => redirect("/na"),
        Err(err) => {
            log::error!("Failed to render product types page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/dashboard/product-types/add")]
pub async fn add_product_type_form(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_add_product_type_form_service(&user) {
        Ok(()) => {
            let context = base_context(
                &flash_messages,
                &user,
                "product_types",
                &server_config.auth_service_url,
            );
            render_form(
                &tera,
                context,
                &AddProductTypeForm::default(),
                &FieldErrors::default(),
                None,
            )
        }
        Err(ServiceError::Unauthorized) => redirect("/na"),
        Err(err) => {
            log::error!("Failed to render add product type page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/dashboard/product-types/add")]
pub async fn add_product_type(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<AddProductTypeForm>,
) -> impl Responder {
    match show_add_product_type_form_service(&user) {
        Ok(()) => {}
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => {
            log::error!("Failed to render add product type page: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    let context = base_context(
        &flash_messages,
        &user,
        "product_types",
        &server_config.auth_service_url,
    );

    let payload: AddProductTypeFormPayload = match form.clone().try_into() {
        Ok(payload) => payload,
        Err(e) => {
            log::debug!("{e}");
            return render_form(&tera, context, &form, &e.field_errors(), None);
        }
    };

    match add_product_type_service(payload, &user, repo.get_ref()) {
        Ok(submission) => match submission.redirect_to() {
            Some(location) => {
                FlashMessage::success("تم إنشاء نوع المنتج بنجاح.").send();
                redirect(location)
            }
            None => render_form(
                &tera,
                context,
                &form,
                &FieldErrors::default(),
                submission.error(),
            ),
        },
        Err(ServiceError::Unauthorized) => redirect("/na"),
        Err(err) => {
            log::error!("Failed to add product type: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

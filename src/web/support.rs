use web_sys::{FormData, HtmlFormElement};

use crate::api::{self, TicketResponse};
use crate::ui_model::{Severity, TicketDraft};

use super::{http, loading, notify};

pub(super) async fn submit_ticket(form: HtmlFormElement) {
    let Some(draft) = read_ticket_form(&form) else {
        return;
    };

    loading::show();
    let res = http::post_json::<_, TicketResponse>(api::CREATE_TICKET_URL, &draft).await;
    loading::hide();

    match res {
        Ok(data) if data.success => {
            notify::show(
                &format!("Support ticket created: {}", data.ticket_id),
                Severity::Success,
            );
            form.reset();
        }
        Ok(data) => notify::show(
            data.error
                .as_deref()
                .unwrap_or("Failed to create support ticket"),
            Severity::Error,
        ),
        Err(err) => {
            log::error!("create_ticket: {err}");
            notify::show("Failed to create support ticket", Severity::Error);
        }
    }
}

fn read_ticket_form(form: &HtmlFormElement) -> Option<TicketDraft> {
    let data = FormData::new_with_form(form).ok()?;
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    Some(TicketDraft {
        customer_name: field("customer_name"),
        customer_phone: field("customer_phone"),
        customer_email: field("customer_email"),
        order_id: field("order_id"),
        category: field("category"),
        subject: field("subject"),
        description: field("description"),
    })
}

use super::{apply_captures, set_if_some, submit};
use crate::api::{ApiClient, Transport};
use crate::cli::parser::{SiteCommand, SiteFields};
use crate::config::Config;
use crate::core::{
    DeleteOutcome, DetailController, FormController, InspectionDraft, ListController, ListState,
    WorkSiteDraft,
};
use crate::errors::AppResult;
use crate::models::{Inspection, WorkSite};
use crate::ui::messages::{ask_confirmation, header, info, notice};
use crate::utils::colors::{colorize_status, dim, label};
use crate::utils::date::backend_to_display;
use crate::utils::formatting::{describe_location, describe_photo, wrap_block};
use crate::utils::table::{Column, Table};

pub fn handle<T: Transport>(
    action: &SiteCommand,
    cfg: &Config,
    api: &ApiClient<T>,
    color: bool,
) -> AppResult<()> {
    match action {
        SiteCommand::List => list(api),
        SiteCommand::Show { id } => show(api, id, color),
        SiteCommand::Add { fields } => {
            let mut form = FormController::<T, WorkSiteDraft>::create(api);
            apply_fields(form.draft_mut(), fields);
            apply_captures(&mut form, &fields.capture, cfg)?;
            submit(&mut form)
        }
        SiteCommand::Edit { id, fields } => {
            let mut form = FormController::<T, WorkSiteDraft>::edit(api, id);
            form.load()?;
            apply_fields(form.draft_mut(), fields);
            apply_captures(&mut form, &fields.capture, cfg)?;
            submit(&mut form)
        }
        SiteCommand::Del { id, yes } => {
            let mut detail = DetailController::new(api, id);
            let outcome = detail.delete(|c| {
                *yes || ask_confirmation(
                    &format!("{}: {}", c.title, c.message),
                    c.confirm_label,
                    c.cancel_label,
                )
            })?;
            match outcome {
                DeleteOutcome::Declined => info("Operation cancelled."),
                _ => {
                    if let Some(n) = detail.notice() {
                        notice(n);
                    }
                }
            }
            Ok(())
        }
        SiteCommand::Email { id, address } => {
            let mut detail = DetailController::new(api, id);
            detail.set_email(address);
            detail.send_report()?;
            if let Some(n) = detail.notice() {
                notice(n);
            }
            Ok(())
        }
        SiteCommand::Inspect { id, fields } => {
            let mut form = FormController::<T, InspectionDraft>::create_linked(api, id);
            super::inspection::apply_fields(form.draft_mut(), fields)?;
            apply_captures(&mut form, &fields.capture, cfg)?;
            submit(&mut form)
        }
    }
}

fn apply_fields(draft: &mut WorkSiteDraft, fields: &SiteFields) {
    set_if_some(&mut draft.name, &fields.name);
    set_if_some(&mut draft.responsible, &fields.responsible);
    set_if_some(&mut draft.start_date, &fields.start);
    set_if_some(&mut draft.end_date, &fields.end);
    set_if_some(&mut draft.description, &fields.description);
}

fn list<T: Transport>(api: &ApiClient<T>) -> AppResult<()> {
    let mut screen = ListController::<T, WorkSite>::new(api);
    screen.load()?;

    if screen.state() == ListState::Empty {
        info("No work sites registered.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("ID", 26),
        Column::new("Name", 28),
        Column::new("Responsible", 20),
        Column::new("Period", 25),
        Column::new("Photo", 5),
    ]);

    for site in screen.items() {
        table.add_row(vec![
            site.id.clone(),
            site.name.clone(),
            site.responsible.clone(),
            format!(
                "{} → {}",
                backend_to_display(&site.start_date),
                backend_to_display(&site.end_date)
            ),
            if site.photo.as_deref().is_some_and(|p| !p.is_empty()) {
                "yes".to_string()
            } else {
                "-".to_string()
            },
        ]);
    }

    header("Work sites");
    print!("{}", table.render());
    Ok(())
}

fn show<T: Transport>(api: &ApiClient<T>, id: &str, color: bool) -> AppResult<()> {
    let mut screen = DetailController::new(api, id);
    screen.load()?;

    // load() only returns Ok once the site arrived
    let Some(site) = screen.site() else {
        return Ok(());
    };

    header(&site.name);
    println!("{} {}", label("Responsible:", color), site.responsible);
    println!(
        "{} {} → {}",
        label("Dates:", color),
        backend_to_display(&site.start_date),
        backend_to_display(&site.end_date)
    );
    println!("{} {}", label("Location:", color), describe_location(site.location));
    println!("{} {}", label("Photo:", color), describe_photo(site.photo.as_deref()));
    println!("{}", label("Description:", color));
    println!("{}", wrap_block(&site.description, 76, "  "));

    println!();
    println!("{}", label("Inspections", color));
    if screen.inspections().is_empty() {
        println!("{}", dim("No inspections registered.", color));
    } else {
        for insp in screen.inspections() {
            print_inspection(insp, color);
        }
    }

    Ok(())
}

pub(crate) fn print_inspection(insp: &Inspection, color: bool) {
    println!(
        "- {} - {}  [{}]",
        colorize_status(insp.status, color),
        backend_to_display(&insp.date),
        insp.id
    );
    if !insp.observations.is_empty() {
        println!("{}", wrap_block(&insp.observations, 76, "    "));
    }
    if let Some(p) = insp.location {
        println!("    {}", dim(&p.to_string(), color));
    }
    if insp.photo.as_deref().is_some_and(|p| !p.is_empty()) {
        println!("    {}", dim(&describe_photo(insp.photo.as_deref()), color));
    }
}

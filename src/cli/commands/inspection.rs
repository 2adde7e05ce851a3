use super::site::print_inspection;
use super::{apply_captures, set_if_some, submit};
use crate::api::{ApiClient, Transport};
use crate::cli::parser::{InspectionCommand, InspectionFields};
use crate::config::Config;
use crate::core::{FormController, InspectionDraft, SitePicker};
use crate::errors::{AppError, AppResult};
use crate::models::{Inspection, InspectionStatus, WorkSite};
use crate::ui::messages::{header, warning};
use crate::utils::colors::label;
use tracing::debug;

pub fn handle<T: Transport>(
    action: &InspectionCommand,
    cfg: &Config,
    api: &ApiClient<T>,
    color: bool,
) -> AppResult<()> {
    match action {
        InspectionCommand::Add { site, fields } => {
            let mut form = FormController::<T, InspectionDraft>::create(api);
            if let Some(site) = site {
                pick_site(api, form.draft_mut(), site);
            }
            apply_fields(form.draft_mut(), fields)?;
            apply_captures(&mut form, &fields.capture, cfg)?;
            submit(&mut form)
        }
        InspectionCommand::Edit { id, site, fields } => {
            let mut form = FormController::<T, InspectionDraft>::edit(api, id);
            form.load()?;
            if let Some(site) = site {
                pick_site(api, form.draft_mut(), site);
            }
            apply_fields(form.draft_mut(), fields)?;
            apply_captures(&mut form, &fields.capture, cfg)?;
            submit(&mut form)
        }
        InspectionCommand::Show { id } => show(api, id, color),
    }
}

fn show<T: Transport>(api: &ApiClient<T>, id: &str, color: bool) -> AppResult<()> {
    let insp = api.get::<Inspection>(id)?;

    // the owning site is context only
    let site_name = match api.get::<WorkSite>(&insp.site_id) {
        Ok(site) => site.name,
        Err(e) => {
            debug!(site = %insp.site_id, error = %e, "owning work site unavailable");
            insp.site_id.clone()
        }
    };

    header(format!("Inspection {}", insp.id));
    println!("{} {}", label("Work site:", color), site_name);
    print_inspection(&insp, color);
    Ok(())
}

/// Only sites offered by the picker can be chosen; an unknown id leaves
/// the field empty so validation reports it.
fn pick_site<T: Transport>(api: &ApiClient<T>, draft: &mut InspectionDraft, site_id: &str) {
    let picker = SitePicker::load(api);
    match picker.find(site_id) {
        Some(option) => draft.site_id = option.id.clone(),
        None => {
            warning(format!(
                "Work site '{}' is not among the {} available options.",
                site_id,
                picker.options().len()
            ));
            draft.site_id.clear();
        }
    }
}

pub(crate) fn apply_fields(draft: &mut InspectionDraft, fields: &InspectionFields) -> AppResult<()> {
    set_if_some(&mut draft.date, &fields.date);
    set_if_some(&mut draft.observations, &fields.observations);

    if let Some(code) = &fields.status {
        let status = InspectionStatus::from_code(code).ok_or_else(|| {
            AppError::InvalidStatus(format!(
                "'{}'. Use one of: {}",
                code,
                InspectionStatus::ALL
                    .iter()
                    .map(|s| s.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })?;
        draft.status = Some(status);
    }

    Ok(())
}

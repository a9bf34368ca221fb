use crate::infra::InMemorySubmissionRepository;
use chrono::Utc;
use clap::Args;
use mehfil::error::AppError;
use mehfil::onboarding::{
    BusinessType, OnboardingService, StatusChange, SubmissionFilter, SubmissionStatus,
    WizardSession,
};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Vendor category to walk through (venue, boutique, beauty-parlor,
    /// decor, catering)
    #[arg(long, default_value = "catering")]
    pub(crate) business_type: String,
    /// Skip the admin review portion of the demo
    #[arg(long)]
    pub(crate) skip_review: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let business_type = BusinessType::parse(&args.business_type).unwrap_or(BusinessType::Catering);

    println!("Partner onboarding demo");
    println!("Category: {}", business_type.label());

    let mut session = WizardSession::new();
    session.choose_business_type(business_type);

    println!("\nStep sequence ({} steps)", session.total_steps());
    for index in 0..session.total_steps() {
        session.go_to_step(index).expect("index within sequence");
        println!(
            "- {:>2}. {} ({:.0}%)",
            index + 1,
            session.current_step().title,
            session.progress() * 100.0
        );
    }
    session.go_to_step(1).expect("owner step exists");

    // A blocked transition first, to show the gate at work.
    session.set_field("ownerName", "Ayesha");
    session.set_field("ownerMobile", "03001234567");
    match session.go_next() {
        Ok(()) => println!("\nUnexpectedly advanced without an email"),
        Err(result) => {
            println!("\nForward gate held at '{}'", session.current_step().title);
            for (field, message) in &result.errors {
                println!("- {field}: {message}");
            }
        }
    }

    session.set_field("ownerEmail", "ayesha@spiceco.pk");
    session.set_field("managerName", "Hamza");
    session.set_field("managerMobile", "03217654321");
    session.set_field("businessName", "Spice Co");
    session.set_field("city", "Karachi");
    session.set_field("area", "Clifton");
    session.set_field("address", "123 Street");
    session.set_field("bankName", "Meezan Bank");
    session.set_field("accountTitle", "Spice Co");
    session.set_field("cancellationPolicy", "48hr notice");
    if business_type == BusinessType::Catering {
        session.set_field(
            "cuisineTypes",
            vec!["Mughlai".to_string(), "BBQ".to_string()],
        );
        session.set_field("minGuestOrder", "100");
        session.set_field("liveStations", true);
    }

    while session.current_index() < session.total_steps() - 1 {
        if let Err(result) = session.go_next() {
            println!("\nDemo data fails validation: {:?}", result.errors);
            return Ok(());
        }
    }

    println!("\nReview & Submit");
    for section in session.review() {
        println!("{}", section.title);
        for field in &section.fields {
            println!("- {}: {}", field.label, field.value);
        }
    }

    let payload = match session.finalize() {
        Ok(payload) => payload,
        Err(err) => {
            println!("\nSubmission blocked: {err}");
            return Ok(());
        }
    };

    let repository = Arc::new(InMemorySubmissionRepository::default());
    let service = OnboardingService::new(repository);

    let stored = service.submit(payload, Utc::now())?;
    println!(
        "\nSubmitted {} as {} ({})",
        stored.payload.business_name.as_deref().unwrap_or("-"),
        stored.id.0,
        stored.status().label()
    );

    if args.skip_review {
        return Ok(());
    }

    println!("\nAdmin review");
    let reviewed = service.review_status(
        &stored.id,
        StatusChange {
            status: SubmissionStatus::UnderReview,
            admin_notes: Some("Profile looks complete, verifying payout details".to_string()),
            reviewed_by: Some("demo-admin".to_string()),
        },
        Utc::now(),
    )?;
    println!(
        "- {} -> {} (reviewed by {})",
        reviewed.id.0,
        reviewed.status().label(),
        reviewed.reviewed_by.as_deref().unwrap_or("-")
    );

    let page = service.list(&SubmissionFilter {
        status: Some(SubmissionStatus::UnderReview),
        business_type: None,
        page: 1,
        limit: 10,
    })?;
    println!(
        "- {} submission(s) awaiting a decision",
        page.pagination.total
    );
    for record in &page.items {
        let view = record.summary_view();
        println!(
            "  - {} | {} | {} | {}",
            view.id.0,
            view.business_type,
            view.business_name.as_deref().unwrap_or("-"),
            view.status_label
        );
    }

    Ok(())
}

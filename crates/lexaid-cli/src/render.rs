use lexaid_core::state::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    KeyDetails,
    Report,
    Checklist,
    History,
}

pub fn print_status(state: &SessionState) {
    println!("phase: {}", state.phase().label());
    println!(
        "role: {}",
        state
            .user_role
            .map(|role| role.label())
            .unwrap_or("(not set)")
    );
    if let Some(error) = &state.error {
        println!("last error: {error}");
    }
    match &state.analysis_result {
        Some(result) => {
            println!(
                "document: {} ({} chat messages)",
                if result.key_details.document_type.is_empty() {
                    "analyzed"
                } else {
                    &result.key_details.document_type
                },
                state.chat_history.len()
            );
        }
        None => println!("document: none analyzed yet"),
    }
}

pub fn print_section(state: &SessionState, section: Section) {
    let Some(result) = &state.analysis_result else {
        if section == Section::History {
            print_history(state);
            return;
        }
        println!("No analyzed document in this session. Run `lexaid analyze` first.");
        return;
    };

    match section {
        Section::KeyDetails => print_key_details(state),
        Section::Report => {
            println!("Summary");
            println!("  {}", result.analysis.summary);
            if !result.analysis.clauses_analysis.is_empty() {
                println!();
                println!("Clauses");
                for clause in &result.analysis.clauses_analysis {
                    println!("  - {}", clause.clause);
                    println!("    {}", clause.meaning);
                    if !clause.citation.is_empty() {
                        println!("    cf. {}", clause.citation);
                    }
                }
            }
            if !result.analysis.references.is_empty() {
                println!();
                println!("References");
                for reference in &result.analysis.references {
                    println!("  - {reference}");
                }
            }
        }
        Section::Checklist => {
            if result.actionable_checklist.is_empty() {
                println!("No checklist items.");
                return;
            }
            for (index, item) in result.actionable_checklist.iter().enumerate() {
                println!("  {}. {item}", index + 1);
            }
        }
        Section::History => print_history(state),
    }
}

pub fn print_key_details(state: &SessionState) {
    let Some(result) = &state.analysis_result else {
        return;
    };
    let details = &result.key_details;
    println!("Key details");
    println!("  document type: {}", details.document_type);
    println!("  confidence: {}", details.confidence_score);
    println!("  effective period: {}", details.effective_period);
    if !details.parties_involved.is_empty() {
        println!("  parties: {}", details.parties_involved.join(", "));
    }
    if !details.clauses_involved.is_empty() {
        println!("  clauses: {}", details.clauses_involved.join(", "));
    }
    for term in &details.key_terms {
        println!("  {}: {}", term.term, term.definition);
    }
}

fn print_history(state: &SessionState) {
    if state.chat_history.is_empty() {
        println!("No chat messages yet.");
        return;
    }
    for message in &state.chat_history {
        println!("{:>9}: {}", message.role.label(), message.text);
    }
}

//! Scripted brokerage walkthrough
//!
//! Builds a small sample catalog and runs every manager and agent operation
//! once, printing a status line for each step. Rejected operations are
//! reported and the script carries on.

use anyhow::{Context, Result};
use brokerage::{
    highest_earning_agent, Agent, DomainError, Manager, Property, PropertyId,
    PropertySearchFilter,
};
use colored::Colorize;
use std::io::Write;

fn section<W: Write>(out: &mut W, title: &str) -> Result<()> {
    writeln!(out, "\n{}", format!("--- {} ---", title).bold())?;
    Ok(())
}

fn report<W: Write, T>(out: &mut W, result: Result<T, DomainError>, ok: &str) -> Result<()> {
    match result {
        Ok(_) => writeln!(out, "{} {}", "✓".green(), ok)?,
        Err(e) => writeln!(out, "{} {}", "✗".red(), e)?,
    }
    Ok(())
}

/// Keep constructions that succeed, report the ones that fail
fn build<W: Write>(
    out: &mut W,
    label: &str,
    result: Result<Property, DomainError>,
) -> Result<Option<Property>> {
    match result {
        Ok(property) => {
            writeln!(out, "{} Created {}", "✓".green(), label)?;
            Ok(Some(property))
        }
        Err(e) => {
            writeln!(out, "{} Could not create {}: {}", "✗".red(), label, e)?;
            Ok(None)
        }
    }
}

pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let mut manager = Manager::in_memory();

    section(out, "Properties")?;
    let samples = vec![
        build(
            out,
            "#R001",
            Property::residential("#R001", "123 Dufferin Road", 1233.0, 700000.0, 3, 2, "Town House"),
        )?,
        build(
            out,
            "#R002",
            Property::residential("#R002", "31 Dewry Road", 120.0, 1500000.0, 7, 5, "Single House"),
        )?,
        build(
            out,
            "#R003",
            Property::residential("#R003", "892 Yonge Street", -156.0, -600000.0, 0, 0, ""),
        )?,
        build(
            out,
            "#C001",
            Property::commercial("#C001", "101 Daveford Rd", 3124.0, 1000000.0, 50, 4, 1, "Warehouse"),
        )?,
        build(
            out,
            "#C002",
            Property::commercial("#C002", "202 Queen St", 3000.0, 750000.0, 20, 2, 2, "Store"),
        )?,
        build(
            out,
            "#C003",
            Property::commercial("#C003", "123 Woodbine Ave", 1500.0, 400000.0, -5, 0, 1, ""),
        )?,
    ];
    for property in samples.into_iter().flatten() {
        manager.add_property(property)?;
    }

    let mut agents = vec![
        Agent::new("#A001", "Bryan", "Bryan@gmail.com"),
        Agent::new("#A002", "Khoi", "Khoi@gmail.com"),
        Agent::new("#A003", "Hannah", "Hannah@gmail.com"),
    ];

    section(out, "Assigning Agents")?;
    for (property_id, agent_index) in [("#R001", 0), ("#C002", 0), ("#R002", 1), ("#C001", 1)] {
        let agent = &agents[agent_index];
        let result = manager.assign_agent(&PropertyId::from(property_id), agent);
        report(
            out,
            result,
            &format!("{} has been assigned to {}", property_id, agent.name()),
        )?;
    }

    section(out, "All Properties Sorted by Price")?;
    manager.show_all_properties_sorted(out)?;

    section(out, "Modified Property")?;
    let r001 = PropertyId::from("#R001");
    manager.set_selling_price(&r001, 750000.0)?;
    manager
        .property(&r001)?
        .context("#R001 missing from catalog")?
        .show_details(out)?;

    section(out, "All Properties After Deletion")?;
    manager.remove_property(&PropertyId::from("#R002"))?;
    manager.show_all_properties_sorted(out)?;

    section(out, "Search Results")?;
    let filter = PropertySearchFilter::new()
        .with_property_type("Warehouse")
        .with_max_price(1800000.0);
    let found = manager.search_properties(&filter)?;
    if found.is_empty() {
        writeln!(out, "No properties found.")?;
    }
    for property in &found {
        property.show_details(out)?;
    }

    let res1 = manager
        .property(&r001)?
        .context("#R001 missing from catalog")?
        .clone();
    let com1 = manager
        .property(&PropertyId::from("#C001"))?
        .context("#C001 missing from catalog")?
        .clone();

    section(out, "Agent Selling Property")?;
    let result = agents[0].sell_property(&res1);
    report(out, result, "Bryan successfully sold property #R001")?;
    let result = agents[1].sell_property(&res1);
    report(out, result, "Khoi successfully sold property #R001")?;

    section(out, "Agent Successfully Buying Property")?;
    let result = agents[0].buy_property(&com1);
    report(out, result, "Bryan successfully bought property #C001")?;

    section(out, "Agent Unsuccessfully Buying Property")?;
    let result = agents[0].buy_property(&res1);
    report(out, result, "Bryan successfully bought property #R001")?;

    section(out, "Highest Earning Agent")?;
    match highest_earning_agent(&agents) {
        Some(agent) => agent.show_details(out)?,
        None => writeln!(out, "No agent available.")?,
    }

    Ok(())
}

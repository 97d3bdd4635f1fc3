// Demonstration driver for the gym facility system.
// Walks the full scenario script: registration, plan creation with
// equipment validation, and assignment with lock/capacity policy.

use std::sync::Arc;

use anyhow::Result;

use gym_facility::{Equipment, EquipmentCategory, Exercise, Facility, Member};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    println!("=== Gym Facility System v{} ===\n", gym_facility::VERSION);

    let mut facility = Facility::new();

    // ============================================
    // Scenario 1: register 10 pieces of equipment
    // ============================================
    println!("--- Scenario 1: register equipment ---");

    let treadmill = facility
        .register_equipment(Equipment::new("G001", "Treadmill", EquipmentCategory::Endurance)?)?;
    let leg_press = facility
        .register_equipment(Equipment::new("G002", "Leg Press", EquipmentCategory::Strength)?)?;
    let rowing = facility.register_equipment(Equipment::new(
        "G003",
        "Rowing Machine",
        EquipmentCategory::Endurance,
    )?)?;
    let bench = facility.register_equipment(Equipment::new(
        "G004",
        "Bench Press Machine",
        EquipmentCategory::Strength,
    )?)?;
    facility
        .register_equipment(Equipment::new("G005", "Dumbbells", EquipmentCategory::Strength)?)?;
    let barbell = facility
        .register_equipment(Equipment::new("G006", "Barbell", EquipmentCategory::Strength)?)?;
    let bike = facility.register_equipment(Equipment::new(
        "G007",
        "Exercise Bike",
        EquipmentCategory::Endurance,
    )?)?;
    let cable = facility
        .register_equipment(Equipment::new("G008", "Cable Pull", EquipmentCategory::Strength)?)?;
    facility
        .register_equipment(Equipment::new("G009", "Kettlebell", EquipmentCategory::Endurance)?)?;
    facility
        .register_equipment(Equipment::new("G010", "Foam Roller", EquipmentCategory::Endurance)?)?;
    println!("✓ {} pieces of equipment registered\n", facility.equipment().len());

    // ============================================
    // Scenario 2: register 4 members
    // ============================================
    println!("--- Scenario 2: register members ---");

    facility.register_member(Member::new("M001", "Max Miller", "1 Sample Street")?)?;
    facility.register_member(Member::new("M002", "Anna Smith", "5 Example Way")?)?;
    facility.register_member(Member::new("M003", "Peter Mills", "10 Test Road")?)?;
    facility.register_member(Member::new("M004", "Lisa Weaver", "3 Demo Square")?)?;
    println!("✓ {} members registered\n", facility.members().len());

    // ============================================
    // Scenario 3: create training plans
    // ============================================
    println!("--- Scenario 3: create training plans ---");

    let full_body = facility.create_plan(
        "Full Body",
        vec![
            Exercise::repetitions("Bench Press", "Chest training", 3, Arc::clone(&bench), 12)?,
            Exercise::repetitions("Squats", "Leg training", 4, Arc::clone(&leg_press), 15)?,
            Exercise::duration("Running", "Endurance training", 1, Arc::clone(&treadmill), 20)?,
        ],
    )?;
    println!("✓ created: {}", full_body.name());

    let legs = facility.create_plan(
        "Leg Day",
        vec![
            Exercise::repetitions("Leg Press", "Leg strength", 4, Arc::clone(&leg_press), 12)?,
            Exercise::repetitions("Barbell Squats", "Legs and glutes", 3, barbell, 10)?,
        ],
    )?;
    println!("✓ created: {}", legs.name());

    let back = facility.create_plan(
        "Back Day",
        vec![
            Exercise::repetitions("Rowing", "Back training", 3, rowing, 15)?,
            Exercise::repetitions("Lat Pulldown", "Upper back", 3, cable, 12)?,
        ],
    )?;
    println!("✓ created: {}", back.name());

    let endurance = facility.create_plan(
        "Endurance",
        vec![
            Exercise::duration("Running", "Endurance training", 1, treadmill, 30)?,
            Exercise::duration("Cycling", "Leg endurance", 1, bike, 25)?,
        ],
    )?;
    println!("✓ created: {}\n", endurance.name());

    // ============================================
    // Scenario 4: assign a valid plan
    // ============================================
    println!("--- Scenario 4: assign a valid plan ---");

    match facility.assign_plan("M001", &full_body) {
        Ok(()) => println!("✓ \"{}\" assigned to M001\n", full_body.name()),
        Err(e) => println!("✗ unexpected rejection: {e}\n"),
    }

    // ============================================
    // Scenario 5: reject a plan with unknown equipment
    // ============================================
    println!("--- Scenario 5: reject a plan with unregistered equipment ---");

    let phantom = Arc::new(Equipment::new(
        "G999",
        "Phantom Machine",
        EquipmentCategory::Strength,
    )?);
    let bad_plan = facility.create_plan(
        "Bad Plan",
        vec![Exercise::repetitions("Test Exercise", "Test", 3, phantom, 10)?],
    );
    match bad_plan {
        Ok(_) => println!("✗ ERROR: invalid plan was accepted!\n"),
        Err(e) => println!("✓ correctly rejected: {e}\n"),
    }

    // ============================================
    // Scenario 6: reject assignment to a locked member
    // ============================================
    println!("--- Scenario 6: reject assignment to a locked member ---");

    if let Some(member) = facility.member_by_number_mut("M002") {
        member.set_locked(true);
        println!("member M002 has been locked");
    }
    match facility.assign_plan("M002", &legs) {
        Ok(()) => println!("✗ ERROR: plan was assigned to a locked member!\n"),
        Err(e) => println!("✓ correctly rejected: {e}\n"),
    }

    // ============================================
    // Scenario 7: three plans succeed, the fourth is rejected
    // ============================================
    println!("--- Scenario 7: assign three plans, reject the fourth ---");

    for (i, plan) in [&full_body, &legs, &back].iter().enumerate() {
        match facility.assign_plan("M003", plan) {
            Ok(()) => println!("✓ plan {} assigned: {}", i + 1, plan.name()),
            Err(e) => println!("✗ unexpected rejection: {e}"),
        }
    }
    match facility.assign_plan("M003", &endurance) {
        Ok(()) => println!("✗ ERROR: a fourth plan was assigned!\n"),
        Err(e) => println!("✓ correctly rejected: {e}\n"),
    }

    // ============================================
    // Scenario 8: print a member's active plans
    // ============================================
    println!("--- Scenario 8: active plans of member M003 ---");

    if let Some(member) = facility.member_by_number("M003") {
        println!("{member}");
        for (i, plan) in member.active_plans().iter().enumerate() {
            println!("\nPlan {}:", i + 1);
            print!("{plan}");
        }
    }

    // ============================================
    // Facility summary
    // ============================================
    println!("\n--- Facility summary ---");
    println!("{}", serde_json::to_string_pretty(&facility)?);

    println!("\n=== All scenarios completed ===");
    Ok(())
}

use console::Style;
use gigapan_core::spec::PanSpec;
use gigapan_core::step::StepPlan;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
        }
    }
}

fn degrees(value: f64) -> String {
    format!("{value:.1}\u{b0}")
}

pub fn print_plan_summary(spec: &PanSpec, plan: &StepPlan, shots: usize) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Gigapan Plan"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(12)));
    println!();

    // Camera
    println!("  {}", s.header.apply_to("Camera"));
    println!(
        "    {:<14}{}",
        s.label.apply_to("Focal length"),
        s.value.apply_to(spec.focal_length)
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Sensor"),
        s.value
            .apply_to(format!("{} x {}", spec.sensor_width, spec.sensor_height))
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Field of view"),
        s.value.apply_to(format!(
            "{} x {}",
            degrees(plan.hfov),
            degrees(plan.vfov)
        ))
    );
    println!();

    // Window
    println!("  {}", s.header.apply_to("Window"));
    println!(
        "    {:<14}{}",
        s.label.apply_to("Start"),
        s.value.apply_to(format!(
            "yaw {}, pitch {}",
            degrees(spec.start.yaw),
            degrees(spec.start.pitch)
        ))
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Yaw"),
        s.value.apply_to(format!(
            "{} .. {}",
            degrees(spec.left_limit),
            degrees(spec.right_limit)
        ))
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Pitch"),
        s.value.apply_to(format!(
            "{} .. {}",
            degrees(spec.down_limit),
            degrees(spec.up_limit)
        ))
    );
    println!();

    // Steps
    println!("  {}", s.header.apply_to("Steps"));
    println!(
        "    {:<14}{}",
        s.label.apply_to("Overlap"),
        s.value.apply_to(format!(
            "{}% horizontal, {}% vertical",
            spec.horizontal_overlap_pct, spec.vertical_overlap_pct
        ))
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Yaw step"),
        s.value.apply_to(degrees(plan.yaw_step))
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Pitch step"),
        s.value.apply_to(degrees(plan.pitch_step))
    );
    if spec.optimize {
        println!(
            "    {:<14}{}",
            s.label.apply_to("Latitude"),
            s.method.apply_to("optimized per row")
        );
    } else {
        println!(
            "    {:<14}{}",
            s.label.apply_to("Latitude"),
            s.disabled.apply_to("uncorrected")
        );
    }
    println!();

    println!(
        "  {:<16}{}",
        s.header.apply_to("Shots"),
        s.value.apply_to(shots)
    );
    println!();
}

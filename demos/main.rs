use cube_mesh::{CubeMeshBuilder, export};

const USAGE: &str = "usage: cube-mesh [--no-normals] [--name NAME] [OUTPUT.obj]";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut builder = CubeMeshBuilder::new();
    let mut output = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--no-normals" => builder = builder.with_normals(false),
            "--name" => {
                let Some(name) = args.next() else {
                    anyhow::bail!("--name needs a value\n{USAGE}");
                };
                builder = builder.with_name(name);
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            flag if flag.starts_with('-') => anyhow::bail!("unknown flag {flag}\n{USAGE}"),
            path => output = Some(path.to_string()),
        }
    }

    let mesh = builder.build();
    match output {
        Some(path) => export::save_obj(&mesh, path)?,
        None => export::write_obj(&mesh, std::io::stdout().lock())?,
    }
    Ok(())
}

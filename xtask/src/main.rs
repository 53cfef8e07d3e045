use camino::{Utf8Path, Utf8PathBuf};
use rayon::prelude::*;
use std::fs;
use wadsvg::render::{self, SourceInfo};
use wadsvg::{MatchMode, RenderOptions, Theme, Wad};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage();
    }

    match args[1].as_str() {
        "render-all" => {
            if args.len() < 4 {
                usage();
            }
            let light = args[4..].iter().any(|a| a == "--light");
            render_all(Utf8Path::new(&args[2]), Utf8Path::new(&args[3]), light);
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

fn usage() -> ! {
    eprintln!("Usage: cargo xtask <command>");
    eprintln!("Commands:");
    eprintln!("  render-all <wad> <outdir> [--light]   Render every map to <outdir>/<MAP>.svg plus an index.html");
    std::process::exit(1);
}

fn render_all(wad_path: &Utf8Path, out_dir: &Utf8Path, light: bool) {
    let data = fs::read(wad_path).unwrap_or_else(|e| {
        eprintln!("Could not read {wad_path}: {e}");
        std::process::exit(1);
    });
    let maps = wadsvg::list_maps(&data).unwrap_or_else(|e| {
        eprintln!("{wad_path}: {e}");
        std::process::exit(1);
    });
    fs::create_dir_all(out_dir).expect("Failed to create output directory");

    let options = RenderOptions {
        draw_things: true,
        padding: 16,
        theme: if light { Theme::Light } else { Theme::Dark },
        ..RenderOptions::default()
    };

    // Each map is an independent run over the shared read-only bytes
    // (name, output file or error text)
    let mut results: Vec<(String, Result<Utf8PathBuf, String>)> = maps
        .par_iter()
        .map(|map| {
            let name = map.name.to_string();
            let result = render_one(&data, wad_path, &name, &options)
                .map_err(|e| e.to_string())
                .and_then(|svg| {
                    let path = out_dir.join(format!("{name}.svg"));
                    fs::write(&path, svg).map_err(|e| e.to_string())?;
                    Ok(path)
                });
            (name, result)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));

    let rendered = results.iter().filter(|r| r.1.is_ok()).count();
    for (name, result) in &results {
        match result {
            Ok(path) => eprintln!("{name} -> {path}"),
            Err(e) => eprintln!("{name}: {e}"),
        }
    }

    let index = out_dir.join("index.html");
    fs::write(&index, index_html(wad_path, &results)).expect("Failed to write index.html");
    eprintln!("{rendered}/{} maps rendered, index at {index}", results.len());
}

/// Render one map, matching its marker name exactly so "E1M1" never picks up "E1M10"
fn render_one(data: &[u8], wad_path: &Utf8Path, name: &str, options: &RenderOptions) -> wadsvg::Result<String> {
    let wad = Wad::parse(data)?;
    let map = wad.load_map(name, MatchMode::Exact)?;
    let source = SourceInfo {
        name: wad_path.as_str(),
        requested: name,
        wad: &wad,
    };
    render::render(&map, options, Some(source))
}

fn index_html(wad_path: &Utf8Path, results: &[(String, Result<Utf8PathBuf, String>)]) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{wad_path}</title>
    <style>
        body {{
            font-family: system-ui, sans-serif;
            margin: 24px;
            background: #eee;
            color: #333;
        }}
        .map-card {{
            background: white;
            border-radius: 8px;
            box-shadow: 0 1px 3px rgba(0,0,0,0.08);
            margin-bottom: 16px;
            padding: 12px 16px;
        }}
        .map-card img {{
            max-width: 100%;
            max-height: 600px;
        }}
        .error {{
            color: #991b1b;
        }}
    </style>
</head>
<body>
<h1>{wad_path}</h1>
"#
    ));

    for (name, result) in results {
        html.push_str("<div class=\"map-card\">\n");
        html.push_str(&format!("<h2>{name}</h2>\n"));
        match result {
            Ok(_) => html.push_str(&format!("<img src=\"{name}.svg\" alt=\"{name}\">\n")),
            Err(e) => html.push_str(&format!(
                "<p class=\"error\">{}</p>\n",
                e.replace('&', "&amp;").replace('<', "&lt;")
            )),
        }
        html.push_str("</div>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

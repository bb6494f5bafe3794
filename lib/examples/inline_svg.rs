use svg2vd::{convert_str, Settings};

fn main() {
    let svg = r#"<svg xmlns='http://www.w3.org/2000/svg' width='48px' height='48px' viewBox='0 0 24 24'>
<style>.crown { fill: navy; }</style>
<g id='logo'>
    <path class='crown' d='M2 20 L4 8 L9 13 L12 4 L15 13 L20 8 L22 20 Z'/>
    <polygon points='2,22 22,22 22,23 2,23' fill='silver'/>
</g>
</svg>"#;

    let mut settings = Settings::default();
    settings.postprocess.pretty = true;

    match convert_str(svg, &settings) {
        Ok(xml) => println!("{xml}"),
        Err(err) => eprintln!("conversion failed: {err}"),
    }
}

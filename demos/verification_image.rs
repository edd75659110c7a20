// MIT/Apache2 License

//! Render a drawing with one of every shape and write it out as a binary PPM.
//!
//! Usage: `cargo run --example verification_image -- out.ppm [--aa]`

use easel::{
    Circle, Color, DrawingState, FillRule, InputEvent, Key, Line, PenType, Pill, PixelBuffer, Point,
    Polygon, Rectangle, RenderOptions, Surface, Tool,
};
use std::{env, fs::File, io::Write, process};

const WIDTH: u32 = 400;
const HEIGHT: u32 = 300;

fn verification_image(state: &mut DrawingState) {
    let mut rectangle = Rectangle::new(Point::new(50, 50), Point::new(150, 100), Color::BLACK, 8);
    rectangle.set_fill_color(Color::rgb(0, 0, 255));
    state.push_shape(rectangle.into());

    state.push_shape(
        Line::new(Point::new(250, 125), Point::new(350, 275), Color::BLACK, 3, PenType::Brush).into(),
    );
    // on top of the line, so that its outline stays closed for the flood fill below
    state.push_shape(Circle::new(Point::new(300, 200), 50, Color::rgb(0, 128, 0)).into());

    let mut star = Polygon::new(
        vec![
            Point::new(100, 150),
            Point::new(112, 185),
            Point::new(150, 185),
            Point::new(120, 207),
            Point::new(131, 243),
            Point::new(100, 221),
            Point::new(69, 243),
            Point::new(80, 207),
            Point::new(50, 185),
            Point::new(88, 185),
        ],
        Color::BLACK,
        1,
    );
    star.set_fill_color(Color::rgb(255, 200, 0));
    state.push_shape(star.into());

    state.push_shape(
        Pill::finalized(Point::new(200, 40), Point::new(330, 70), 12, Color::rgb(200, 0, 0)).into(),
    );

    // flood the inside of the circle through the input path, like a user would
    state.settings_mut().fill = Some(FillRule::SolidColor(Color::rgb(180, 230, 180)));
    state.settings_mut().boundary_color = Color::rgb(0, 128, 0);
    state.set_tool(Tool::FloodFill);
    state.handle(InputEvent::PointerDown(Point::new(320, 200)));
    state.handle(InputEvent::PointerUp(Point::new(320, 200)));
    state.handle(InputEvent::Key(Key::Cancel));
}

fn write_ppm(buffer: &PixelBuffer, out: &mut impl Write) -> std::io::Result<()> {
    write!(out, "P6\n{} {}\n255\n", buffer.width(), buffer.height())?;
    let bytes: Vec<u8> = buffer
        .pixels()
        .iter()
        .flat_map(|c| [c.red(), c.green(), c.blue()])
        .collect();
    out.write_all(&bytes)
}

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: verification_image <out.ppm> [--aa]");
            process::exit(1);
        }
    };
    let options = if args.any(|arg| arg == "--aa") {
        RenderOptions::antialiased()
    } else {
        RenderOptions::default()
    };

    let mut state = DrawingState::new(WIDTH, HEIGHT);
    verification_image(&mut state);

    let mut buffer = PixelBuffer::filled(WIDTH, HEIGHT, Color::WHITE);
    state.render(&mut buffer, &options);

    let result = File::create(&path).and_then(|mut file| write_ppm(&buffer, &mut file));
    if let Err(e) = result {
        eprintln!("failed to write {}: {}", path, e);
        process::exit(1);
    }
}

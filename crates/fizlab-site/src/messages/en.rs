//! English messages.

pub static MESSAGES: &[(&str, &str)] = &[
    // --- Site ---
    ("site.name", "FizLab"),
    ("seo.default_description", "Interactive physics lessons: electricity, space, the microworld and perception."),
    // --- Route paths ---
    ("route.home", "/"),
    ("route.electricity", "/electricity-and-magnetism"),
    ("route.earth_space", "/earth-and-space"),
    ("route.microworld", "/microworld"),
    ("route.perception", "/perception"),
    ("route.quiz", "/quiz"),
    ("route.facts", "/daily-facts"),
    ("route.scale", "/scale-of-the-universe"),
    // --- Page titles & descriptions ---
    ("seo.home.title", "FizLab — interactive physics lessons"),
    ("seo.home.description", "Learn physics by playing: simulations, quizzes and daily facts."),
    ("seo.electricity.title", "Electricity and magnetism"),
    ("seo.electricity.description", "Electric current, electron drift and alternating current in interactive simulations."),
    ("seo.earth_space.title", "Earth and space"),
    ("seo.earth_space.description", "Planetary motion and the pendulum — everyday and celestial mechanics."),
    ("seo.microworld.title", "Microworld"),
    ("seo.microworld.description", "Atomic structure, particle collisions and the DNA double helix."),
    ("seo.perception.title", "Perception"),
    ("seo.perception.description", "How the senses pick up sound and light — experiments in perception."),
    ("seo.quiz.title", "Physics quiz"),
    ("seo.quiz.description", "Test your knowledge of electricity, space and the microworld."),
    ("seo.facts.title", "Fact of the day"),
    ("seo.facts.description", "A daily dose of physics trivia."),
    ("seo.scale.title", "Scale of the Universe"),
    ("seo.scale.description", "From the proton to the observable Universe — a journey across orders of magnitude."),
    ("seo.notfound.title", "Page not found"),
    ("seo.notfound.description", "There is no page at this address."),
    // --- Controls ---
    ("control.play", "Play"),
    ("control.pause", "Pause"),
    ("control.reset", "Reset"),
    ("control.speed", "Speed"),
    // --- Sliders ---
    ("param.voltage", "Voltage (V)"),
    ("param.frequency", "Frequency (Hz)"),
    ("param.amplitude", "Amplitude"),
    ("param.ball_speed", "Ball speed"),
    ("param.orbit_speed", "Orbit speed"),
    ("param.length", "Length (m)"),
    ("param.electron_count", "Electron count"),
    ("param.rotation_speed", "Rotation speed"),
    ("param.zoom_exponent", "Scale (power of 10)"),
    // --- Readouts ---
    ("readout.drift_speed", "Drift speed"),
    ("readout.current", "Instantaneous current"),
    ("readout.kinetic_energy", "Kinetic energy"),
    ("readout.period", "Period"),
    ("readout.inner_period", "Innermost planet period"),
    ("readout.atomic_number", "Atomic number"),
    ("readout.zoom", "Current scale"),
    // --- Scale catalog ---
    ("scale.proton", "Proton"),
    ("scale.atom", "Atom"),
    ("scale.virus", "Virus"),
    ("scale.bacterium", "Bacterium"),
    ("scale.sand_grain", "Grain of sand"),
    ("scale.human", "Human"),
    ("scale.blue_whale", "Blue whale"),
    ("scale.everest", "Mount Everest"),
    ("scale.earth", "Earth"),
    ("scale.sun", "Sun"),
    ("scale.solar_system", "Solar System"),
    ("scale.galaxy", "Milky Way"),
    ("scale.universe", "Observable Universe"),
    // --- Quiz ---
    ("quiz.progress", "Question {current} of {total}"),
    ("quiz.score", "Score: {score}/{total}"),
    // --- Not found ---
    ("notfound.message", "We couldn't find that page. Head back to the home page."),
];

//! Hungarian messages. A handful of the newer readout and scale keys
//! have no translation yet and fall back to Polish.

pub static MESSAGES: &[(&str, &str)] = &[
    // --- Site ---
    ("site.name", "FizLab"),
    ("seo.default_description", "Interaktív fizikaleckék: elektromosság, világűr, mikrovilág és érzékelés."),
    // --- Route paths ---
    ("route.home", "/"),
    ("route.electricity", "/elektromossag-es-magnesesseg"),
    ("route.earth_space", "/fold-es-vilagur"),
    ("route.microworld", "/mikrovilag"),
    ("route.perception", "/erzekeles"),
    ("route.quiz", "/kviz"),
    ("route.facts", "/erdekessegek"),
    ("route.scale", "/vilagegyetem-merete"),
    // --- Page titles & descriptions ---
    ("seo.home.title", "FizLab — interaktív fizikaleckék"),
    ("seo.home.description", "Tanulj fizikát játszva: szimulációk, kvízek és érdekességek."),
    ("seo.electricity.title", "Elektromosság és mágnesesség"),
    ("seo.electricity.description", "Elektromos áram, elektronsodródás és váltakozó áram interaktív szimulációkban."),
    ("seo.earth_space.title", "Föld és világűr"),
    ("seo.earth_space.description", "Bolygómozgás és az inga — mechanika a mindennapokban és az égen."),
    ("seo.microworld.title", "Mikrovilág"),
    ("seo.microworld.description", "Az atom felépítése, részecskeütközések és a DNS kettős spirálja."),
    ("seo.perception.title", "Érzékelés"),
    ("seo.perception.description", "Hogyan érzékeljük a hangot és a fényt — kísérletek az érzékeléssel."),
    ("seo.quiz.title", "Fizikakvíz"),
    ("seo.quiz.description", "Tedd próbára a tudásod elektromosságból, csillagászatból és mikrovilágból."),
    ("seo.facts.title", "A nap érdekessége"),
    ("seo.facts.description", "Napi adag fizikai érdekesség."),
    ("seo.scale.title", "A Világegyetem mérete"),
    ("seo.scale.description", "A protontól a megfigyelhető Világegyetemig — utazás a nagyságrendeken át."),
    ("seo.notfound.title", "Az oldal nem található"),
    ("seo.notfound.description", "Ezen a címen nincs oldal."),
    // --- Controls ---
    ("control.play", "Indítás"),
    ("control.pause", "Szünet"),
    ("control.reset", "Alaphelyzet"),
    ("control.speed", "Sebesség"),
    // --- Sliders ---
    ("param.voltage", "Feszültség (V)"),
    ("param.frequency", "Frekvencia (Hz)"),
    ("param.amplitude", "Amplitúdó"),
    ("param.ball_speed", "Golyó sebessége"),
    ("param.orbit_speed", "Keringési sebesség"),
    ("param.length", "Hossz (m)"),
    ("param.electron_count", "Elektronok száma"),
    ("param.rotation_speed", "Forgási sebesség"),
    ("param.zoom_exponent", "Skála (10 hatványa)"),
    // --- Readouts ---
    ("readout.drift_speed", "Sodródási sebesség"),
    ("readout.current", "Pillanatnyi áram"),
    ("readout.kinetic_energy", "Mozgási energia"),
    ("readout.period", "Periódus"),
    ("readout.atomic_number", "Rendszám"),
    // --- Scale catalog ---
    ("scale.proton", "Proton"),
    ("scale.atom", "Atom"),
    ("scale.virus", "Vírus"),
    ("scale.bacterium", "Baktérium"),
    ("scale.sand_grain", "Homokszem"),
    ("scale.human", "Ember"),
    ("scale.earth", "Föld"),
    ("scale.sun", "Nap"),
    ("scale.solar_system", "Naprendszer"),
    ("scale.galaxy", "Tejútrendszer"),
    ("scale.universe", "Megfigyelhető Világegyetem"),
    // --- Quiz ---
    ("quiz.progress", "{current}. kérdés a(z) {total} közül"),
    ("quiz.score", "Eredmény: {score}/{total}"),
    // --- Not found ---
    ("notfound.message", "Nem találtuk az oldalt. Térj vissza a kezdőlapra."),
];

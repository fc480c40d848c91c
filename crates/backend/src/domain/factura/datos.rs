//! Catálogos estáticos para el generador de facturas sintéticas

use rand::seq::SliceRandom;
use rand::Rng;

const NOMBRES: &[&str] = &[
    "Carlos", "María", "Andrés", "Luisa", "Juan", "Camila", "Santiago", "Valentina", "Felipe",
    "Daniela", "Alejandro", "Paula", "Ricardo", "Natalia", "Javier", "Sofía",
];

const APELLIDOS: &[&str] = &[
    "Gómez", "Rodríguez", "Martínez", "López", "García", "Hernández", "Torres", "Ramírez",
    "Castro", "Vargas", "Moreno", "Jiménez", "Rojas", "Mendoza",
];

const DOMINIOS: &[&str] = &["example.com", "correo.co", "empresa.com.co", "mail.co"];

const CIUDADES: &[&str] = &[
    "Bogotá", "Medellín", "Cali", "Barranquilla", "Cartagena", "Bucaramanga", "Pereira",
    "Manizales", "Cúcuta", "Ibagué",
];

const VIAS: &[&str] = &["Calle", "Carrera", "Avenida", "Transversal", "Diagonal"];

const SERVICIOS: &[&str] = &[
    "Soporte técnico",
    "Licencia de software",
    "Consultoría",
    "Mantenimiento preventivo",
    "Desarrollo a la medida",
    "Capacitación",
    "Hosting",
    "Auditoría de sistemas",
    "Migración de datos",
    "Mesa de ayuda",
];

const CALIFICADORES: &[&str] = &[
    "empresarial",
    "premium",
    "mensual",
    "anual",
    "básico",
    "avanzado",
    "corporativo",
    "estándar",
];

fn elegir<'a, R: Rng + ?Sized>(rng: &mut R, lista: &'a [&'a str]) -> &'a str {
    lista.choose(rng).copied().unwrap_or("")
}

/// Descripción de una línea de factura, estilo "Consultoría empresarial"
pub fn descripcion_de_item<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", elegir(rng, SERVICIOS), elegir(rng, CALIFICADORES))
}

/// Nombre completo y email derivado del mismo nombre
pub fn cliente<R: Rng + ?Sized>(rng: &mut R) -> (String, String) {
    let nombre = elegir(rng, NOMBRES);
    let apellido = elegir(rng, APELLIDOS);
    let email = format!(
        "{}.{}@{}",
        para_email(nombre),
        para_email(apellido),
        elegir(rng, DOMINIOS)
    );
    (format!("{} {}", nombre, apellido), email)
}

/// Celular colombiano
pub fn telefono<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "+57 3{:02} {:03} {:04}",
        rng.gen_range(0..100),
        rng.gen_range(0..1000),
        rng.gen_range(0..10000)
    )
}

/// Dirección urbana, estilo "Carrera 45 # 12-30"
pub fn direccion<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {} # {}-{}",
        elegir(rng, VIAS),
        rng.gen_range(1..=150),
        rng.gen_range(1..=99),
        rng.gen_range(1..=99)
    )
}

pub fn ciudad<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    CIUDADES.choose(rng).copied().unwrap_or("Bogotá")
}

// Local-part de email: minúsculas y sin tildes ni eñes
fn para_email(palabra: &str) -> String {
    palabra
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            'ñ' => 'n',
            'ü' => 'u',
            other => other,
        })
        .collect()
}

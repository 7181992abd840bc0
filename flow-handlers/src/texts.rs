//! User-visible texts shared across dialogues.

pub const GREETING: &str = "Te damos la bienvenida a *La Cazuela Dorada*!";
pub const OPTIONS_KEYWORD: &str = "opciones";

pub const APOLOGY: &str =
    "Lo sentimos, ha ocurrido un problema. Por favor, inténtalo de nuevo.";
pub const INVALID_OPTION: &str =
    "Respuesta no válida, por favor selecciona una de las opciones.";
pub const INVALID_YES_NO: &str = "Respuesta no válida, por favor responde *Sí* o *No*.";
pub const EXIT_MESSAGE: &str =
    "Saliendo... Puedes volver a acceder a este menú escribiendo '*Opciones*'";

// Menu dialogue
pub const MENU_CAPTION: &str = "Nuestro menú";
pub const MENU_QUESTION: &str =
    "Aquí tienes nuestro menú, ¿te gustaría pedir algo? Responde con *Sí* o *No*.";
pub const MENU_DECLINED: &str =
    "Entendido, si cambias de opinión, estamos aquí para ayudarte.";

// Reservation dialogue
pub const ASK_DATE: &str =
    "¡Perfecto! ¿Para qué fecha quieres tu reserva? Indícala como en el ejemplo: *26 de agosto*.";
pub const INVALID_DATE: &str =
    "No he entendido la fecha. Escríbela como *día de mes*, por ejemplo: 26 de agosto.";
pub const PAST_DATE: &str = "Esa fecha ya pasó. Por favor, indica una fecha futura.";
pub const NO_SLOTS: &str =
    "No tenemos horarios disponibles para esa fecha. ¿Quieres probar con otra?";
pub const ASK_DETAILS: &str = "Ahora envíame en un solo mensaje, separados por comas:\n\n\
     1. *Nombre completo*\n\
     2. *Número de personas*\n\
     3. *Hora de inicio* (HH:MM)\n\n\
     Ejemplo: Juan Pérez, 4 personas, 10:00";
pub const INVALID_DETAILS: &str =
    "Por favor, asegúrate de proporcionar todos los detalles correctamente en el formato indicado.";
pub const INVALID_TIME: &str =
    "No he entendido la hora. Usa el formato de 24 horas, por ejemplo: 19:00.";
pub const OUTSIDE_HOURS: &str =
    "Nuestro horario de reservas va de las 08:00 a las 21:00. Elige una hora dentro de ese rango.";
pub const PAST_TIME: &str = "Esa hora ya pasó hoy. Indica una hora futura.";
pub const EXCLUDED_RANGE: &str =
    "Ese horario cae entre dos turnos. Por favor, elige una hora dentro de un turno disponible.";
pub const NO_TABLE: &str =
    "No quedan mesas libres para esa hora. ¿Puedes elegir otro horario?";
pub const CONFIRM_PROMPT: &str = "¿Confirmamos la reserva? Responde *Sí* o *No*.";
pub const TABLE_TAKEN: &str =
    "Vaya, esa mesa se acaba de ocupar. Elige otro horario, por favor.";
pub const SAVE_FAILED: &str = "Hubo un problema al guardar tu reserva. Inténtalo de nuevo.";
pub const RESERVATION_CANCELLED: &str =
    "Reserva cancelada. Puedes volver al menú escribiendo *Opciones*.";

// Consult dialogue
pub const ASK_CONSULT: &str = "¿Cuál es tu consulta?";
pub const ANOTHER_CONSULT: &str = "¿Tienes otra consulta? Responde *Sí* o *No*.";

// Order dialogue
pub const ASK_ORDER: &str = "¿Qué te gustaría pedir?";
pub const MORE_ORDER: &str =
    "¿Deseas pedir algo más? Si ya está completo tu pedido, responde *No*.";
pub const CONFIRM_PAYMENT: &str =
    "Tu pedido está anotado. ¿Confirmas el pago? Responde *Sí* o *No*.";
pub const PAYMENT_DONE: &str =
    "¡Pago confirmado! Tu pedido está en marcha. ¡Gracias por elegirnos!";
pub const PAYMENT_DECLINED: &str =
    "Entendido, gracias por tu visita. Puedes volver al menú escribiendo *Opciones*.";
